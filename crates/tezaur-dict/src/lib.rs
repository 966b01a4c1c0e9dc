pub mod convert;
pub mod dictionary;

pub use convert::{ConvertError, convert_dict_uk};
pub use dictionary::{DictError, Dictionary};

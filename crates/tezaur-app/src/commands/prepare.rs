use anyhow::Context;
use tezaur_dict::convert_dict_uk;

use crate::cli::PrepareArgs;
use crate::output;

pub fn run(args: PrepareArgs) -> anyhow::Result<()> {
    let destination = args
        .destination
        .unwrap_or_else(|| output::default_destination("dictionary"));

    convert_dict_uk(&args.input, &destination).with_context(|| {
        format!(
            "failed to convert {} into {}",
            args.input.display(),
            destination.display()
        )
    })?;

    tracing::info!(
        "Converted dictionary stored to file {}",
        destination.display()
    );

    Ok(())
}

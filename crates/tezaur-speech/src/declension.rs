/// One of the seven grammatical cases carried by declinable speech parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Declension {
    #[default]
    Nominative,
    Genetive,
    Dative,
    Accusative,
    Ablative,
    Vocative,
    Locative,
}

impl Declension {
    /// All cases in declaration order.
    pub const ALL: [Declension; 7] = [
        Declension::Nominative,
        Declension::Genetive,
        Declension::Dative,
        Declension::Accusative,
        Declension::Ablative,
        Declension::Vocative,
        Declension::Locative,
    ];

    /// Raw tag code used for input matching, e.g. `v_rod`.
    pub fn code(self) -> &'static str {
        match self {
            Declension::Nominative => "v_naz",
            Declension::Genetive => "v_rod",
            Declension::Dative => "v_dav",
            Declension::Accusative => "v_zna",
            Declension::Ablative => "v_oru",
            Declension::Vocative => "v_kly",
            Declension::Locative => "v_mis",
        }
    }

    /// Ukrainian display label used in rendered output.
    pub fn label(self) -> &'static str {
        match self {
            Declension::Nominative => "називний",
            Declension::Genetive => "родовий",
            Declension::Dative => "давальний",
            Declension::Accusative => "знахідний",
            Declension::Ablative => "орудний",
            Declension::Vocative => "кличний",
            Declension::Locative => "місцевий",
        }
    }

    /// Looks up a case by its raw input code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|case| case.code() == code)
    }
}

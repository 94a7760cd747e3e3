/// Flavor Domain Module
///
/// Defines the two supported generation flavors and the knobs each one
/// fixes: how deep the extractor scans and what the generated functions
/// return.

/// Which scopes the extractor descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Only the top level of the translation unit.
    TopLevel,
    /// Recurse through arbitrarily nested namespaces.
    Namespaces,
}

/// Return type of the generated lookup functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnStyle {
    /// Owning `std::string` built from the literal.
    OwnedString,
    /// Non-owning `const char*` pointing at the literal.
    BorrowedLiteral,
}

impl ReturnStyle {
    /// C++ spelling of the return type.
    pub fn type_text(&self) -> &'static str {
        match self {
            ReturnStyle::OwnedString => "std::string",
            ReturnStyle::BorrowedLiteral => "const char*",
        }
    }
}

/// Output flavor selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Top-level enums only, owning return type, no include line.
    Minimal,
    /// Namespace-aware discovery, literal-pointer return type, plus an
    /// include directive for the scanned file.
    Namespaced,
}

impl Flavor {
    /// Parse flavor from string (CLI input).
    pub fn from_str(s: &str) -> Option<Flavor> {
        match s.to_lowercase().as_str() {
            "minimal" | "min" => Some(Flavor::Minimal),
            "namespaced" | "ns" => Some(Flavor::Namespaced),
            _ => None,
        }
    }

    /// Get the display name of the flavor.
    pub fn name(&self) -> &'static str {
        match self {
            Flavor::Minimal => "minimal",
            Flavor::Namespaced => "namespaced",
        }
    }

    /// Scan depth used by the extractor.
    pub fn scan_mode(&self) -> ScanMode {
        match self {
            Flavor::Minimal => ScanMode::TopLevel,
            Flavor::Namespaced => ScanMode::Namespaces,
        }
    }

    /// Return type used by the emitter, applied to the whole run.
    pub fn return_style(&self) -> ReturnStyle {
        match self {
            Flavor::Minimal => ReturnStyle::OwnedString,
            Flavor::Namespaced => ReturnStyle::BorrowedLiteral,
        }
    }

    /// Whether the output starts with an include for the scanned file.
    pub fn emits_include(&self) -> bool {
        matches!(self, Flavor::Namespaced)
    }
}

impl Default for Flavor {
    fn default() -> Self {
        Flavor::Namespaced
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Flavor::from_str("minimal"), Some(Flavor::Minimal));
        assert_eq!(Flavor::from_str("MINIMAL"), Some(Flavor::Minimal));
        assert_eq!(Flavor::from_str("min"), Some(Flavor::Minimal));
        assert_eq!(Flavor::from_str("namespaced"), Some(Flavor::Namespaced));
        assert_eq!(Flavor::from_str("ns"), Some(Flavor::Namespaced));
        assert_eq!(Flavor::from_str("fancy"), None);
    }

    #[test]
    fn test_default_is_namespaced() {
        assert_eq!(Flavor::default(), Flavor::Namespaced);
    }

    #[test]
    fn test_flavor_properties() {
        assert_eq!(Flavor::Minimal.scan_mode(), ScanMode::TopLevel);
        assert_eq!(Flavor::Minimal.return_style(), ReturnStyle::OwnedString);
        assert!(!Flavor::Minimal.emits_include());

        assert_eq!(Flavor::Namespaced.scan_mode(), ScanMode::Namespaces);
        assert_eq!(Flavor::Namespaced.return_style(), ReturnStyle::BorrowedLiteral);
        assert!(Flavor::Namespaced.emits_include());
    }

    #[test]
    fn test_return_type_text() {
        assert_eq!(ReturnStyle::OwnedString.type_text(), "std::string");
        assert_eq!(ReturnStyle::BorrowedLiteral.type_text(), "const char*");
    }
}

//! Inventory report types and the section markers of the text format.

/// Installed software captured by one index run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryReport {
    /// Application bundle names without the `.app` suffix.
    pub applications: Vec<String>,
    /// Homebrew formulae.
    pub formulae: Vec<String>,
    /// Homebrew casks.
    pub casks: Vec<String>,
}

impl InventoryReport {
    /// Create a report from its three lists.
    pub fn new(applications: Vec<String>, formulae: Vec<String>, casks: Vec<String>) -> Self {
        Self {
            applications,
            formulae,
            casks,
        }
    }

    /// Entries of one section.
    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::Applications => &self.applications,
            Section::Formulae => &self.formulae,
            Section::Casks => &self.casks,
        }
    }

    /// Mutable entries of one section.
    pub fn section_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Applications => &mut self.applications,
            Section::Formulae => &mut self.formulae,
            Section::Casks => &mut self.casks,
        }
    }

    /// Whether any installable package is listed.
    pub fn has_packages(&self) -> bool {
        !self.formulae.is_empty() || !self.casks.is_empty()
    }
}

/// One headered block of the report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Applications,
    Formulae,
    Casks,
}

/// Prefix that introduces every header line.
pub const HEADER_PREFIX: &str = "###";

/// Line prefixes the parser treats as "nothing found" sentinels.
pub const SENTINEL_PREFIXES: [&str; 2] = ["No ", "Homebrew not found"];

impl Section {
    /// Sections in file order.
    pub const ALL: [Section; 3] = [Section::Applications, Section::Formulae, Section::Casks];

    /// Text between the `###` markers.
    pub fn title(self) -> &'static str {
        match self {
            Self::Applications => "macOS Installed Applications",
            Self::Formulae => "Homebrew Formulae",
            Self::Casks => "Homebrew Casks",
        }
    }

    /// Full header line as written to the file.
    pub fn header(self) -> String {
        format!("{} {} {}", HEADER_PREFIX, self.title(), HEADER_PREFIX)
    }

    /// Line written in place of an empty list.
    pub fn sentinel(self) -> &'static str {
        match self {
            Self::Applications => "No applications found in /Applications or ~/Applications.",
            Self::Formulae => "Homebrew not found or no formulae installed.",
            Self::Casks => "Homebrew not found or no casks installed.",
        }
    }

    /// Identify the section a header line introduces.
    ///
    /// Matching is by substring so small wording changes around the title
    /// still parse.
    pub fn from_header(line: &str) -> Option<Section> {
        Self::ALL
            .into_iter()
            .find(|section| line.contains(section.title()))
    }
}

/// Whether a line inside a section is a "nothing found" sentinel.
///
/// A real name starting with one of these prefixes is dropped too; the
/// format has no escape for it.
pub fn is_sentinel(line: &str) -> bool {
    SENTINEL_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

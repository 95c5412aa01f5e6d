//! The configuration options for the printer

/// Configuration for the printer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// The max print width to aim for
    pub print_width: usize,
    /// The number of spaces a nested chain or block body is indented by
    pub tab_width: usize,
    /// Rewrite trivial blocks such as `{ |x| x.name }` into `&:name`
    pub to_proc: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            print_width: 80,
            tab_width: 2,
            to_proc: false,
        }
    }
}

impl FormatOptions {
    pub(crate) fn indent(&self) -> isize {
        isize::try_from(self.tab_width).unwrap_or(isize::MAX)
    }
}

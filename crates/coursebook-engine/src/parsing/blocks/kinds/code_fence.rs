#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Returns the fence kind if the line opens or closes a code fence.
    pub fn sig(line: &str) -> Option<FenceKind> {
        let t = line.trim();
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    /// The info string after an opening fence, if any (`` ```rust `` gives `rust`).
    pub fn language(line: &str) -> Option<&str> {
        let t = line.trim();
        let delim = match Self::sig(t)? {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        };
        let lang = t.trim_start_matches(delim).trim();
        (!lang.is_empty()).then_some(lang)
    }

    /// Whether `line` closes a fence opened with `kind`.
    ///
    /// A fence of the other kind is content, so mixed fence styles nest.
    pub fn closes(kind: FenceKind, line: &str) -> bool {
        Self::sig(line) == Some(kind) && Self::language(line).is_none()
    }
}

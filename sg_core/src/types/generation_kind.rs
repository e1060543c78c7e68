use std::fmt;

/// Request kinds that can fail upstream. Video is always served from demo
/// assets and has no failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Text,
    Image,
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenerationKind::Text => "Text",
            GenerationKind::Image => "Image",
        };
        f.write_str(name)
    }
}

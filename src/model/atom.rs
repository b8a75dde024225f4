#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub symbol: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(symbol: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            symbol: symbol.into(),
            position,
        }
    }
}

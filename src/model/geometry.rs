use std::collections::HashMap;

use super::atom::Atom;

/// Sequence form of a molecular geometry.
///
/// Atoms keep file order, so indices are stable and duplicate symbols stay
/// distinguishable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    atoms: Vec<Atom>,
}

impl Geometry {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    #[inline]
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.atoms.iter().map(|atom| atom.position)
    }
}

impl FromIterator<Atom> for Geometry {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Mapping form of a molecular geometry, keyed by atom symbol.
///
/// Duplicate symbols collapse into a single entry: the last coordinate read
/// wins, while the entry stays at the position where the symbol was first
/// seen. [`SymbolMap::collapsed`] reports how many rows were absorbed this
/// way, so callers can surface the loss instead of hiding it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolMap {
    entries: Vec<(String, [f64; 3])>,
    index: HashMap<String, usize>,
    collapsed: usize,
}

impl SymbolMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_geometry(geometry: &Geometry) -> Self {
        let mut map = Self::new();
        for atom in geometry.atoms() {
            map.insert(atom.symbol.clone(), atom.position);
        }
        map
    }

    /// Inserts a symbol, returning the coordinate it replaced, if any.
    pub fn insert(&mut self, symbol: String, position: [f64; 3]) -> Option<[f64; 3]> {
        match self.index.get(&symbol) {
            Some(&slot) => {
                self.collapsed += 1;
                Some(std::mem::replace(&mut self.entries[slot].1, position))
            }
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, position));
                None
            }
        }
    }

    pub fn get(&self, symbol: &str) -> Option<[f64; 3]> {
        self.index.get(symbol).map(|&slot| self.entries[slot].1)
    }

    pub fn entries(&self) -> &[(String, [f64; 3])] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn collapsed(&self) -> usize {
        self.collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_with_duplicate_hydrogens() -> Geometry {
        Geometry::new(vec![
            Atom::new("O", [0.0, 0.0, 0.0]),
            Atom::new("H", [0.0, 0.0, 0.96]),
            Atom::new("H", [0.0, 0.0, -0.96]),
        ])
    }

    #[test]
    fn geometry_keeps_duplicates_in_file_order() {
        let geometry = water_with_duplicate_hydrogens();

        assert_eq!(geometry.atom_count(), 3);
        assert_eq!(geometry.atom(1).unwrap().position, [0.0, 0.0, 0.96]);
        assert_eq!(geometry.atom(2).unwrap().position, [0.0, 0.0, -0.96]);
        assert!(geometry.atom(3).is_none());
    }

    #[test]
    fn symbol_map_last_write_wins() {
        let map = SymbolMap::from_geometry(&water_with_duplicate_hydrogens());

        assert_eq!(map.len(), 2);
        assert_eq!(map.collapsed(), 1);
        assert_eq!(map.get("H"), Some([0.0, 0.0, -0.96]));
        assert_eq!(map.get("O"), Some([0.0, 0.0, 0.0]));
        assert_eq!(map.get("C"), None);
    }

    #[test]
    fn symbol_map_keeps_first_seen_order() {
        let geometry = Geometry::new(vec![
            Atom::new("C", [0.0, 0.0, 0.0]),
            Atom::new("O", [1.2, 0.0, 0.0]),
            Atom::new("C", [2.4, 0.0, 0.0]),
        ]);
        let map = SymbolMap::from_geometry(&geometry);

        let symbols: Vec<_> = map.entries().iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(symbols, vec!["C", "O"]);
        assert_eq!(map.get("C"), Some([2.4, 0.0, 0.0]));
    }

    #[test]
    fn insert_returns_replaced_coordinate() {
        let mut map = SymbolMap::new();
        assert_eq!(map.insert("N".to_string(), [1.0, 0.0, 0.0]), None);
        assert_eq!(
            map.insert("N".to_string(), [2.0, 0.0, 0.0]),
            Some([1.0, 0.0, 0.0])
        );
        assert_eq!(map.collapsed(), 1);
    }
}

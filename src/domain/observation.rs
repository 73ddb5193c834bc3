use crate::domain::InputVector;

/// One historical month. `index` is the row position in the source file (0-based),
/// which doubles as the chart x coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub index: usize,
    pub inputs: InputVector,
    pub monthly_price: f64,
}

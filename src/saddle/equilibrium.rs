use crate::*;
use serde::Serialize;
use serde::ser::SerializeStruct;

/// Verdict of a saddle-point analysis.
///
/// `value` is present exactly when a pure-strategy equilibrium exists.
/// `cells` lists every saddle point in row-major order and is empty
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Equilibrium {
    value: Option<Payoff>,
    cells: Vec<Cell>,
}

impl Equilibrium {
    /// No pure-strategy equilibrium.
    pub fn none() -> Self {
        Self::default()
    }
    /// Equilibrium of the given value, attained at `cells`.
    pub fn saddle(value: Payoff, cells: Vec<Cell>) -> Self {
        Self {
            value: Some(value),
            cells,
        }
    }

    pub fn exists(&self) -> bool {
        self.value.is_some()
    }
    pub fn value(&self) -> Option<Payoff> {
        self.value
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Serialize for Equilibrium {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Equilibrium", 3)?;
        state.serialize_field("exists", &self.exists())?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("cells", &self.cells)?;
        state.end()
    }
}

impl std::fmt::Display for Equilibrium {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let value = self
            .value
            .map(|v| v.to_string())
            .unwrap_or_else(|| String::from("none"));
        let cells = self
            .cells
            .iter()
            .map(Cell::to_string)
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{}, value={}, cells=[{}]", self.exists(), value, cells)
    }
}

//! Human-readable rendering of a single analysis.
use crate::*;
use serde::Serialize;

/// A titled matrix together with its analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<'a> {
    title: &'a str,
    matrix: &'a PayoffMatrix,
    equilibrium: Equilibrium,
}

impl<'a> Report<'a> {
    pub fn new(title: &'a str, matrix: &'a PayoffMatrix) -> Self {
        Self {
            title,
            matrix,
            equilibrium: matrix.equilibrium(),
        }
    }
    pub fn title(&self) -> &str {
        self.title
    }
    pub fn matrix(&self) -> &PayoffMatrix {
        self.matrix
    }
    pub fn equilibrium(&self) -> &Equilibrium {
        &self.equilibrium
    }

    pub fn banner(&self) -> String {
        format!("---- {} ----", self.title)
    }
    pub fn shape(&self) -> String {
        format!("Matrix {}x{}", self.matrix.rows(), self.matrix.cols())
    }
    pub fn verdict(&self) -> String {
        match self.equilibrium.value() {
            None => String::from("No saddle point (no pure-strategy equilibrium)."),
            Some(value) => format!(
                "Saddle point(s) found. Game value (payoff to row player) = {}",
                value
            ),
        }
    }
    /// One line per saddle cell with its payoff.
    pub fn positions(&self) -> Vec<String> {
        self.equilibrium
            .cells()
            .iter()
            .map(|&cell| format!("({}, {})  payoff = {}", cell.row(), cell.col(), self.matrix[cell]))
            .collect()
    }

    /// Every line of the rendered report, tagged with its role.
    pub fn lines(&self) -> Vec<Line> {
        if self.matrix.is_empty() {
            return vec![Line::Invalid(String::from("No valid matrix provided."))];
        }
        let mut lines = vec![
            Line::Banner(self.banner()),
            Line::Shape(self.shape()),
            Line::Verdict(self.verdict(), self.equilibrium.exists()),
        ];
        if self.equilibrium.exists() {
            lines.push(Line::Header(String::from(
                "Equilibrium positions (row, column), zero-based indices and payoffs:",
            )));
            lines.extend(self.positions().into_iter().map(Line::Position));
        }
        lines
    }
}

/// A single line of a [`Report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Invalid(String),
    Banner(String),
    Shape(String),
    /// Verdict text and whether an equilibrium exists.
    Verdict(String, bool),
    Header(String),
    Position(String),
}

impl Line {
    pub fn text(&self) -> &str {
        match self {
            Self::Invalid(s)
            | Self::Banner(s)
            | Self::Shape(s)
            | Self::Verdict(s, _)
            | Self::Header(s)
            | Self::Position(s) => s,
        }
    }
}

impl<'a> From<&'a Entry> for Report<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self::new(entry.title(), entry.matrix())
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line.text())?;
        }
        Ok(())
    }
}

use super::*;
use crate::*;
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use std::io::IsTerminal;
use std::io::Read;

/// Title given to matrices supplied on the command line.
const CUSTOM_TITLE: &str = "custom matrix";

pub struct CLI {
    args: Args,
    catalog: Catalog,
    paint: bool,
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    slug: &'a str,
    title: &'a str,
    rows: usize,
    cols: usize,
}

impl CLI {
    pub fn new(args: Args) -> anyhow::Result<Self> {
        Ok(Self {
            paint: !args.json && std::io::stdout().is_terminal(),
            catalog: Catalog::demo()?,
            args,
        })
    }

    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        crate::log(match args.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Info,
        });
        let cli = Self::new(args)?;
        print!("{}", cli.render()?);
        Ok(())
    }

    pub fn render(&self) -> anyhow::Result<String> {
        match &self.args.query {
            Some(Query::List) => self.list(),
            Some(Query::Show { slug }) => self.show(slug),
            Some(Query::All) | None => self.all(),
            Some(Query::Solve { matrix }) => self.solve(matrix),
        }
    }

    fn list(&self) -> anyhow::Result<String> {
        let listings = self
            .catalog
            .iter()
            .map(|entry| Listing {
                slug: entry.slug(),
                title: entry.title(),
                rows: entry.matrix().rows(),
                cols: entry.matrix().cols(),
            })
            .collect::<Vec<Listing>>();
        if self.args.json {
            return Ok(serde_json::to_string_pretty(&listings)? + "\n");
        }
        Ok(listings
            .iter()
            .map(|l| format!("{:<10} {:>5} {}\n", l.slug, format!("{}x{}", l.rows, l.cols), l.title))
            .collect())
    }

    fn show(&self, slug: &str) -> anyhow::Result<String> {
        let entry = self.catalog.get(slug).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown game '{}', expected one of: {}",
                slug,
                self.catalog.slugs().join(", ")
            )
        })?;
        log::info!("analyzing {}", entry.slug());
        self.emit(&[entry.report()])
    }

    fn all(&self) -> anyhow::Result<String> {
        log::info!("analyzing {} catalog games", self.catalog.len());
        self.emit(&self.catalog.iter().map(Entry::report).collect::<Vec<Report>>())
    }

    fn solve(&self, source: &str) -> anyhow::Result<String> {
        let text = match source {
            "-" => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
            inline => inline.to_string(),
        };
        let ref matrix = serde_json::from_str::<PayoffMatrix>(&text)
            .map_err(|e| anyhow::anyhow!("invalid matrix: {}", e))?;
        log::info!("analyzing {}x{} custom matrix", matrix.rows(), matrix.cols());
        self.emit(&[Report::new(CUSTOM_TITLE, matrix)])
    }

    fn emit(&self, reports: &[Report]) -> anyhow::Result<String> {
        if self.args.json {
            return Ok(serde_json::to_string_pretty(reports)? + "\n");
        }
        Ok(reports
            .iter()
            .map(|report| match self.paint {
                true => paint(report),
                false => report.to_string(),
            })
            .map(|text| text + "\n")
            .collect())
    }
}

/// Colored variant of the report's plain text.
fn paint(report: &Report) -> String {
    report
        .lines()
        .iter()
        .map(|line| match line {
            Line::Invalid(s) => s.yellow(),
            Line::Banner(s) => s.bold(),
            Line::Shape(s) => s.dimmed(),
            Line::Verdict(s, true) => s.green(),
            Line::Verdict(s, false) => s.red(),
            Line::Header(s) | Line::Position(s) => s.normal(),
        })
        .map(|line| format!("{}\n", line))
        .collect()
}

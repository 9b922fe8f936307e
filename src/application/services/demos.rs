//! Demo drivers
//!
//! Each method runs one exercise on fixed or caller-supplied input and
//! collects the lines it would print into a [`DemoReport`].

use std::path::Path;

use tracing::{debug, instrument};

use crate::application::{load_grid, ApplicationResult};
use crate::config::{Settings, TreeStyle};
use crate::domain::{
    magic, LinkedList, Line, MagicReport, MagicSquare, Point, Queue, Tree, TreeConvert, Verdict,
};

/// Printable output of a single demo.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub title: String,
    pub lines: Vec<String>,
    /// Set by the magic-square demos
    pub verdict: Option<Verdict>,
}

impl DemoReport {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            verdict: None,
        }
    }

    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

/// Service running the exercises with the configured defaults.
pub struct DemoService {
    settings: Settings,
}

impl DemoService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Point and line rendering, distance and length.
    #[instrument(level = "debug", skip(self))]
    pub fn geometry(&self, a: Point, b: Point) -> DemoReport {
        let mut report = DemoReport::new("Point / Line");
        report.line(a.to_string());
        report.line(format!("I have two point objects: {} {}", a, b));
        report.line(format!("distance: {}", a.distance_to(&b)));

        let origin = Point::new(0.0, 0.0);
        let unit = Point::new(1.0, 1.0);
        report.line(format!(
            "Distance from {} to {} is: {:.4}",
            origin,
            unit,
            origin.distance_to(&unit)
        ));

        let line = Line::new(a, b);
        report.line(format!("line: {}", line));
        report.line(format!("length: {}", line.length()));
        report
    }

    /// Three trees, each built on the previous one.
    #[instrument(level = "debug", skip(self))]
    pub fn tree(&self, style: Option<TreeStyle>) -> DemoReport {
        let style = style.unwrap_or(self.settings.tree.style);
        let mut report = DemoReport::new("Tree");

        let a = Tree::leaf(5);
        let b = Tree::new(1, Some(a.clone()), None);
        let c = Tree::new(2, Some(Tree::leaf(4)), Some(b.clone()));

        for tree in [&a, &b, &c] {
            debug!(
                "tree: depth={} leaves={:?}",
                tree.depth(),
                tree.leaf_values()
            );
            match style {
                TreeStyle::Sexpr => report.line(tree.show()),
                TreeStyle::Box => {
                    let drawn = tree.to_display_tree().to_string();
                    report.lines.extend(drawn.lines().map(str::to_string));
                }
            }
        }
        report
    }

    #[instrument(level = "debug", skip(self))]
    pub fn linked_list(&self) -> DemoReport {
        let mut report = DemoReport::new("LinkedList");
        let list = LinkedList::new(9, Some(LinkedList::single(-2)));
        report.line(list.show());
        report
    }

    /// Shows the empty queue, then the queue after adding `values` in order.
    #[instrument(level = "debug", skip(self))]
    pub fn queue(&self, values: &[i64]) -> DemoReport {
        let mut report = DemoReport::new("Queue");
        let mut queue = Queue::new();
        report.line(queue.show());
        for &value in values {
            queue.add(value);
        }
        report.line(queue.show());
        report
    }

    /// Functional append: shows the starting list, the grown list, and the
    /// starting list again to prove it was not modified.
    #[instrument(level = "debug", skip(self))]
    pub fn my_list(&self, first: i64, values: &[i64]) -> DemoReport {
        let mut report = DemoReport::new("My List");
        let original = LinkedList::single(first);
        report.line(original.show());

        let grown = values
            .iter()
            .fold(original.clone(), |list, &value| list.add_to_end(value));
        report.line(grown.show());
        report.line(format!("original: {}", original.show()));
        report
    }

    /// Generates a Siamese square and validates it.
    #[instrument(level = "debug", skip(self))]
    pub fn magic(
        &self,
        order: Option<usize>,
        cell_width: Option<usize>,
    ) -> ApplicationResult<DemoReport> {
        let order = order.unwrap_or(self.settings.magic.order);
        let cell_width = cell_width.unwrap_or(self.settings.magic.cell_width);

        let square = MagicSquare::siamese(order)?;
        let mut report = DemoReport::new(format!("Magic square (order {})", order));
        report.lines.extend(square.show(cell_width).lines().map(str::to_string));
        report.line(format!("magic constant: {}", square.magic_constant()));
        push_verdict(&mut report, square.validate()?);
        Ok(report)
    }

    /// Validates a grid read from a file.
    #[instrument(level = "debug", skip(self))]
    pub fn check(&self, path: &Path) -> ApplicationResult<DemoReport> {
        let rows = load_grid(path)?;
        let result = magic::validate(&rows)?;

        let mut report = DemoReport::new(format!("Check {}", path.display()));
        report.line(format!("row sums: {:?}", result.sums.rows));
        report.line(format!("column sums: {:?}", result.sums.cols));
        report.line(format!(
            "diagonals: {} / {}",
            result.sums.diagonal, result.sums.anti_diagonal
        ));
        push_verdict(&mut report, result);
        Ok(report)
    }

    /// Every demo with its default input, in a fixed order.
    pub fn all(&self) -> ApplicationResult<Vec<DemoReport>> {
        Ok(vec![
            self.geometry(Point::new(3.0, 2.0), Point::new(-1.0, 5.0)),
            self.tree(None),
            self.linked_list(),
            self.queue(&[3, 5, -1]),
            self.my_list(3, &[4, 5, 6]),
            self.magic(None, None)?,
        ])
    }
}

fn push_verdict(report: &mut DemoReport, result: MagicReport) {
    report.line(result.verdict.to_string());
    report.verdict = Some(result.verdict);
}

use regula::{
    observers::IterationRecord,
    solvers::{diagnostics::WorkabilityReport, equation::false_position::Solution},
};
use serde::Serialize;

/// Text for the workability check, ending with a blank line.
pub fn report(report: &WorkabilityReport) -> String {
    let mut text = format!(
        "Checking if function is workable...\n\
         Continuous: {}\n\
         Unequal signs: {}\n\
         Number of roots: {}\n\n",
        report.continuous, report.unequal_signs, report.num_roots
    );

    if !report.workable {
        text.push_str("Function is not workable for false position method.\n");
        for reason in report.reasons() {
            text.push_str(&format!("  - {reason}\n"));
        }
    }
    text
}

pub fn iteration(record: &IterationRecord, precision: usize) -> String {
    let p = precision;
    format!(
        "Iteration {}:\nc = {:.p$}\nf(c) = {:.p$}\n\n",
        record.iteration, record.estimate, record.residual
    )
}

pub fn results(solution: &Solution, precision: usize) -> String {
    let p = precision;
    format!(
        "\nResults:\nRoot = {:.p$}\nf(root) = {:.p$}\nNumber of iterations: {}\n",
        solution.x, solution.residual, solution.iters
    )
}

/// Contents of the JSON file written by `--plot`.
///
/// Besides the plot sample it carries the workability report and, when the
/// interval was solved, the solution and every recorded iteration.
#[derive(Debug, Serialize)]
pub struct PlotFile<'a> {
    pub expression: &'a str,
    pub interval: [f64; 2],
    pub report: &'a WorkabilityReport,
    pub solution: Option<&'a Solution>,
    pub iterations: &'a [IterationRecord],
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workable_report_has_no_verdict_line() {
        let text = report(&WorkabilityReport::new(None, true, 1));

        assert_eq!(
            text,
            "Checking if function is workable...\n\
             Continuous: true\n\
             Unequal signs: true\n\
             Number of roots: 1\n\n"
        );
    }

    #[test]
    fn unworkable_report_lists_reasons() {
        let text = report(&WorkabilityReport::new(None, false, 2));

        assert!(text.contains("Function is not workable for false position method.\n"));
        assert!(text.contains("  - f(a) and f(b) do not have opposite signs\n"));
        assert!(text.contains("  - more than one root on the interval (2 sign changes)\n"));
    }

    #[test]
    fn iteration_uses_precision() {
        let record = IterationRecord {
            iteration: 2,
            estimate: 1.25,
            residual: -0.5,
        };
        assert_eq!(iteration(&record, 3), "Iteration 2:\nc = 1.250\nf(c) = -0.500\n\n");
    }

    #[test]
    fn results_block() {
        let solution = Solution {
            x: 2.0,
            residual: 0.0,
            iters: 7,
        };
        assert_eq!(
            results(&solution, 2),
            "\nResults:\nRoot = 2.00\nf(root) = 0.00\nNumber of iterations: 7\n"
        );
    }

    #[test]
    fn plot_file_carries_report_and_iterations() {
        let report = WorkabilityReport::new(None, true, 1);
        let solution = Solution {
            x: 0.5,
            residual: 0.0,
            iters: 1,
        };
        let iterations = [IterationRecord {
            iteration: 1,
            estimate: 0.5,
            residual: 0.0,
        }];
        let plot = PlotFile {
            expression: "2*x - 1",
            interval: [0.0, 1.0],
            report: &report,
            solution: Some(&solution),
            iterations: &iterations,
            xs: vec![-1.5, 2.5],
            ys: vec![-4.0, 4.0],
        };

        let json = serde_json::to_value(&plot).unwrap();
        assert_eq!(json["expression"], "2*x - 1");
        assert_eq!(json["report"]["workable"], true);
        assert_eq!(json["report"]["num_roots"], 1);
        assert_eq!(json["solution"]["x"], 0.5);
        assert_eq!(json["iterations"][0]["iteration"], 1);
        assert_eq!(json["xs"][1], 2.5);
    }

    #[test]
    fn unsolved_plot_file_has_null_solution() {
        let report = WorkabilityReport::new(Some(0.0), false, 0);
        let plot = PlotFile {
            expression: "1/x",
            interval: [-1.0, 1.0],
            report: &report,
            solution: None,
            iterations: &[],
            xs: Vec::new(),
            ys: Vec::new(),
        };

        let json = serde_json::to_value(&plot).unwrap();
        assert_eq!(json["solution"], serde_json::Value::Null);
        assert_eq!(json["report"]["discontinuity"], 0.0);
        assert_eq!(json["iterations"].as_array().map(Vec::len), Some(0));
    }
}

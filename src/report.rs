//! Human-readable output of a forest run.
//! Printed only when [`ForestBuilder::print_results`](crate::ForestBuilder::print_results)
//! is set.
use colored::Colorize;

use crate::tree::TreeLearner;
use crate::oob::OobReport;

const WIDTH: usize = 10;
const PREC_WIDTH: usize = 3;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Print the configuration of a forest run.
pub(crate) fn print_stats<L: TreeLearner>(
    learner: &L,
    n_trees: usize,
    stop_purity: f64,
    mode: &str,
)
{
    let header = format!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", "STATS".bold(), "",
    );
    println!(
        "\n{header}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
        "Tree Learner".bold(),
        learner.name().bold().green(),
    );
    if let Some(info) = learner.info() {
        let line = info.into_iter()
            .map(|(key, val)| {
                format!(
                    "    + {:<STAT_WIDTH$}\t{:>width$}",
                    key,
                    val.bold().yellow(),
                    width = STAT_WIDTH - 8
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        println!("{line}");
    }
    println!(
        "\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
        {:=^FULL_WIDTH$}\n\
        ",
        "Mode".bold(),
        mode.bold().green(),
        "# of Trees".bold(),
        n_trees.to_string().bold().green(),
        "Stop Purity".bold(),
        stop_purity.to_string().bold().green(),
        "".bold(),
    );
}


/// Print the predicted/actual table of `report`
/// followed by the summary line.
pub(crate) fn print_results(report: &OobReport, millisec: u128) {
    println!(
        "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
        "".bold().red(),
        "PREDICTED".bold().blue(),
        "ACTUAL".bold().green(),
    );
    for (i, &(predicted, actual)) in report.predictions.iter().enumerate() {
        let tag = if predicted == actual {
            "[ OK]".bold().bright_green()
        } else {
            "[MIS]".bold().bright_red()
        };
        println!(
            "{tag} {}\t{}\t{}",
            format!("{:>WIDTH$}", i).red(),
            format!("{:>WIDTH$}", predicted).blue(),
            format!("{:>WIDTH$}", actual).green(),
        );
    }

    if let Some(confusion) = report.confusion {
        println!(
            "\n{} TP {}\tTN {}\tFP {}\tFN {}",
            "[CNF]".bold().magenta(),
            confusion.true_positive.to_string().bold(),
            confusion.true_negative.to_string().bold(),
            confusion.false_positive.to_string().bold(),
            confusion.false_negative.to_string().bold(),
        );
    }

    let percent = 100f64 * report.misclassification_rate();
    println!(
        "{} {} / {} misclassified ({})\t{}\n",
        "[FIN]".bold().bright_green(),
        report.misclassified.to_string().bold().red(),
        report.total().to_string().bold(),
        format!("{percent:.PREC_WIDTH$}%").bold().yellow(),
        time_format(millisec).bold().cyan(),
    );
}


/// Format milliseconds as a short human-readable duration.
pub(crate) fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}

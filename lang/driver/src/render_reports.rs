use std::fmt;

use miette::Report;

/// Terminal width for pretty-printing error messages.
const TERMINAL_WIDTH: usize = 200;

pub fn render_reports_to_string(reports: &[Report], colorize: bool) -> String {
    let mut output = String::new();
    // Writing into a `String` does not fail.
    let _ = render_reports(&mut output, reports, colorize);
    output
}

pub fn render_reports<O>(output: &mut O, reports: &[Report], colorize: bool) -> fmt::Result
where
    O: fmt::Write,
{
    let theme = if colorize {
        miette::GraphicalTheme::unicode()
    } else {
        miette::GraphicalTheme::unicode_nocolor()
    };
    let handler = miette::GraphicalReportHandler::new_themed(theme).with_width(TERMINAL_WIDTH);

    let mut reports = reports.iter().peekable();
    while let Some(report) = reports.next() {
        handler.render_report(output, report.as_ref())?;
        if reports.peek().is_some() {
            writeln!(output)?;
        }
    }
    Ok(())
}

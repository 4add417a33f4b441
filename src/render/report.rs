use chrono::NaiveDateTime;

use crate::model::report::TestReport;
use crate::ops::report_ops::display_date;

const REPORT_CSS: &str = "\
        body { font-family: Calibri, Arial, sans-serif; font-size: 12pt; margin: 40px; max-width: 1000px; }
        .header { background-color: #1976D2; color: white; padding: 20px; border-radius: 8px; }
        .header h1 { margin: 0; font-size: 24pt; }
        table { border-collapse: collapse; width: 100%; margin: 20px 0; }
        th, td { border: 1px solid #B0BEC5; padding: 12px; text-align: left; }
        th { background-color: #1976D2; color: white; }
        h2 { color: #1976D2; font-size: 18pt; margin-top: 20px; }
        .status-passed { color: #388E3C; font-weight: bold; }
        .status-fail { color: #D32F2F; font-weight: bold; }
        .status-blocked { color: #FBC02D; font-weight: bold; }
        ul { margin: 10px 0; padding-left: 20px; }
        .footer { text-align: center; color: #616161; margin-top: 40px; padding-top: 20px; border-top: 1px solid #B0BEC5; }
";

/// Render the standalone test-report document. `generated_at` is
/// injected by the caller and stamped into the footer.
pub fn render_report(report: &TestReport, generated_at: NaiveDateTime) -> String {
    let details = &report.details;
    let title = report.display_title();

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(&format!("    <title>{}</title>\n", title));
    out.push_str("    <style>\n");
    out.push_str(REPORT_CSS);
    out.push_str("    </style>\n</head>\n<body>\n");
    out.push_str("    <div class=\"header\">\n");
    out.push_str(&format!("        <h1>{}</h1>\n", title));
    out.push_str("    </div>\n");

    out.push_str("    <h2>Test Report Details</h2>\n");
    out.push_str(&format!(
        "    <p><b>Project Name & Version:</b> {} {}</p>\n",
        details.project_name, details.version
    ));
    out.push_str(&format!("    <p><b>Type of Test:</b> {}</p>\n", details.test_type));
    out.push_str(&format!("    <p><b>Browser:</b> {}</p>\n", details.browser));
    out.push_str(&format!("    <p><b>Change ID:</b> {}</p>\n", details.change_id));
    out.push_str(&format!("    <p><b>Environment:</b> {}</p>\n", details.environment));
    out.push_str(&format!(
        "    <p><b>Start Date:</b> {}</p>\n",
        display_date(&details.start_date)
    ));
    out.push_str(&format!(
        "    <p><b>End Date:</b> {}</p>\n",
        display_date(&details.end_date)
    ));
    out.push_str(&format!("    <p><b>Tester:</b> {}</p>\n", details.tester));
    out.push_str(&format!(
        "    <p><b>Status:</b> <span class=\"status-{}\">{}</span></p>\n",
        details.status.to_lowercase(),
        details.status
    ));

    out.push_str("\n    <h2>Summary</h2>\n");
    out.push_str(&format!(
        "    <p>The QA team tested <b>{}</b> to ensure its functionality, reliability, \
         and performance. This report summarizes the test results and any issues \
         encountered during testing.</p>\n",
        details.project_name
    ));

    out.push_str("\n    <h2>Test Cases</h2>\n");
    if report.test_cases.is_empty() {
        out.push_str("    <p>No test cases provided.</p>\n");
    } else {
        out.push_str("    <ul>\n");
        for case in &report.test_cases {
            out.push_str(&format!("        <li>{}</li>\n", case));
        }
        out.push_str("    </ul>\n");
    }

    out.push_str("\n    <h2>Test Results</h2>\n");
    out.push_str("    <table>\n        <thead>\n            <tr>\n");
    for heading in ["No", "Ticket ID", "Type", "Status", "Priority"] {
        out.push_str(&format!("                <th>{}</th>\n", heading));
    }
    out.push_str("            </tr>\n        </thead>\n        <tbody>\n");
    for (i, result) in report.results.iter().enumerate() {
        out.push_str("            <tr>\n");
        out.push_str(&format!("                <td>{}</td>\n", i + 1));
        out.push_str(&format!("                <td>{}</td>\n", result.ticket_id));
        out.push_str(&format!(
            "                <td style=\"color: {};\">{}</td>\n",
            result.kind.color(),
            result.kind
        ));
        out.push_str(&format!("                <td>{}</td>\n", result.status));
        out.push_str(&format!("                <td>{}</td>\n", result.priority));
        out.push_str("            </tr>\n");
    }
    out.push_str("        </tbody>\n    </table>\n");

    out.push_str("\n    <h2>Issues Identified</h2>\n    <ul>\n");
    for issue in &report.issues {
        out.push_str(&format!("        <li>{}</li>\n", issue));
    }
    out.push_str("    </ul>\n");

    out.push_str("\n    <h2>Comments</h2>\n");
    out.push_str(&format!("    <p><b>Notes:</b> {}</p>\n", report.comments.notes));
    out.push_str(&format!("    <p><b>Remarks:</b> {}</p>\n", report.comments.remarks));
    out.push_str(&format!(
        "    <p><b>Conclusion:</b> {}</p>\n",
        report.comments.conclusion
    ));
    out.push_str("    <div class=\"footer\">\n");
    out.push_str(&format!(
        "        <p>Generated by Test Report Generator on {}</p>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str("    </div>\n</body>\n</html>\n");
    out
}

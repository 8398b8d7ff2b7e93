//! Grouped headers: the first header row spans several columns and the
//! repeated labels of the two header rows are merged.

use boxtable::prelude::*;

fn main() {
    let mut table = Table::new(std::io::stdout());

    table.set_headers(["Namespace", "Resource", "Vulnerabilities", "Misconfigurations"]);
    table.add_headers([
        "Namespace", "Resource", "Critical", "High", "Medium", "Low", "Unknown", "Critical",
        "High", "Medium", "Low", "Unknown",
    ]);
    table.set_header_col_spans(0, [1, 1, 5, 5]);
    table.set_auto_merge_headers(true);
    table.set_header_vertical_alignment(VerticalAlign::Middle);

    table.add_row([
        "default", "Deployment/app", "2", "5", "7", "8", "0", "0", "3", "5", "19", "0",
    ]);
    table.add_row([
        "default", "Ingress/test", "-", "-", "-", "-", "-", "1", "0", "2", "17", "0",
    ]);
    table.add_row([
        "default", "Service/test", "0", "0", "0", "1", "0", "3", "0", "4", "9", "0",
    ]);

    table.render();
}

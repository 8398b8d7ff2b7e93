//! Auto-merge example: repeated cells in consecutive rows are drawn once.

use boxtable::prelude::*;

fn main() {
    let mut table = Table::new(std::io::stdout());
    table.set_auto_merge(true);

    table.set_headers(["System", "Status", "Last Check"]);
    table.add_row(["Life Support", "OK", "Oct 17 09:14:02"]);
    table.add_row(["Nuclear Generator", "OK", "Oct 17 09:13:02"]);
    table.add_row(["Weapons Systems", "FAIL", "Oct 17 09:14:02"]);
    table.add_row(["Shields", "OK", "Oct 17 09:14:02"]);

    table.render();
}

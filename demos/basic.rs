//! Basic example: a small table with a footer and aligned columns.

use boxtable::prelude::*;

fn main() {
    let mut table = Table::new(std::io::stdout());

    table.set_headers(["ID", "Fruit", "Stock"]);
    table.add_row(["1", "Apple", "14"]);
    table.add_row(["2", "Banana", "88,041"]);
    table.add_row(["3", "Cherry", "342"]);
    table.add_row(["4", "Dragonfruit", "1"]);
    table.set_footers(["", "Total", "88,398"]);

    table.set_alignment([Alignment::Right, Alignment::Left, Alignment::Right]);
    table.set_footer_alignment([Alignment::Right, Alignment::Right, Alignment::Right]);

    // Long cells wrap; newlines are kept.
    table.add_row(["5", "Elderberry\n(dried)", "0"]);

    table.render();
}

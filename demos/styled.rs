//! Styled example: coloured lines, bold headers and pre-rendered cell colours.

use boxtable::prelude::*;

fn paint(style: Style, text: &str) -> String {
    format!("{}{text}{}", style.escape(), Style::Normal.escape())
}

fn main() {
    let mut table = Table::new(std::io::stdout());

    table.set_headers(["ID", "Fruit", "Stock", "Description"]);
    table.set_header_style(Style::Bold);
    table.set_line_style(Style::Blue);
    table.set_dividers(UNICODE_ROUNDED);

    table.add_row([
        "1".to_string(),
        paint(Style::Green, "Apple"),
        "14".to_string(),
        format!(
            "An apple is an edible fruit produced by an apple tree ({}).",
            paint(Style::Italic, "Malus domestica")
        ),
    ]);
    table.add_row([
        "2".to_string(),
        paint(Style::Yellow, "Banana"),
        "88,041".to_string(),
        "A banana is an elongated, edible fruit - botanically a berry.".to_string(),
    ]);
    table.add_row([
        "3".to_string(),
        paint(Style::Red, "Cherry"),
        "342".to_string(),
        "A cherry is the fruit of many plants of the genus Prunus, and is a fleshy drupe (stone fruit).".to_string(),
    ]);
    table.add_row([
        "4".to_string(),
        paint(Style::Magenta, "Dragonfruit"),
        "1".to_string(),
        "A dragonfruit is the fruit of several different cactus species indigenous to the Americas.".to_string(),
    ]);

    table.render();
}

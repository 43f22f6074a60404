use std::net::Ipv4Addr;

use colored::*;
use console::measure_text_width;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let text_content: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();
    println!("{sep}{text}{sep}");
}

pub fn fat_separator() {
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
}

/// Centers `msg` on the output width. Colour codes are not counted.
pub fn centerln(msg: &str) {
    let padding: String = " ".repeat(center_padding(msg));
    println!("{padding}{msg}");
}

fn center_padding(msg: &str) -> usize {
    TOTAL_WIDTH.saturating_sub(measure_text_width(msg)) / 2
}

pub fn addresses(addrs: &[Ipv4Addr]) {
    for addr in addrs {
        println!("{addr}");
    }
}

pub fn no_results() {
    println!("{}", "(none)".dimmed());
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

//! # Demo Receipts
//!
//! Named receipt templates built on [`ReceiptBuilder`], used by the CLI and
//! as a reference for composing receipts.
//!
//! | Name | Contents |
//! |------|----------|
//! | `print-test` | Title, merchant details, dashed rule, signature feed |
//! | `sales-slip` | Optional logo, card sale with every row template |

use image::RgbaImage;

use crate::components::{Column, Receipt, ReceiptBuilder};
use crate::font::{Alignment, FontMetrics};
use crate::printer::{PaperWidth, PrintSize};

const RECEIPTS: &[&str] = &["print-test", "sales-slip"];

/// Printer self-test slip.
pub fn print_test<F: FontMetrics>(paper: PaperWidth, font: F) -> Receipt {
    let mut builder = ReceiptBuilder::with_font(paper, font);
    builder
        .text("Print Test", PrintSize::TYPE, true, Alignment::Center)
        .text_pair("Name: Imark", "", PrintSize::SMALL, false)
        .text_pair("Address: Dillibazar, Kathmandu", "", PrintSize::SMALL, false)
        .text_pair("Number: 01-*******", "", PrintSize::SMALL, false)
        .text(
            "-------------x----------------x-------------",
            PrintSize::LINE,
            false,
            Alignment::Center,
        )
        .feed(PrintSize::SIGN_FEED);
    builder.finish()
}

/// Card sale slip. The logo, if any, is centered at the top.
pub fn sales_slip<F: FontMetrics>(paper: PaperWidth, font: F, logo: Option<&RgbaImage>) -> Receipt {
    let mut builder = ReceiptBuilder::with_font(paper, font);
    if let Some(logo) = logo {
        builder.image(logo);
    }

    builder
        .text("SALES SLIP", PrintSize::TYPE, true, Alignment::Center)
        .text("MERCHANT COPY", PrintSize::SMALL, false, Alignment::Center)
        .text_pair("MERCHANT NAME:", "Imark Cafe", PrintSize::NORMAL, false)
        .text_pair("MERCHANT NO:", "123456789012345", PrintSize::NORMAL, false)
        .text_pair("TERMINAL NO:", "10020030", PrintSize::NORMAL, false)
        .text_pair("CARD NO:", "6212********1234", PrintSize::NORMAL, true)
        .text_pair("DATE/TIME:", "2026-10-15 12:00:00", PrintSize::NORMAL, false)
        .text("-------------x----------------x-------------", PrintSize::LINE, false, Alignment::Center)
        .text_triple("ITEM", "QTY", "PRICE", PrintSize::SMALL, true)
        .text_triple("Masala Tea", "2", "120.00", PrintSize::SMALL, false)
        .text_triple("Momo (Buff)", "1", "250.00", PrintSize::SMALL, false)
        .text_quad("REF", "AUTH", "BATCH", "TRACE", PrintSize::SMALL, true)
        .text_quad("000123", "A1B2C3", "000001", "004711", PrintSize::SMALL, false)
        .columns(
            &[Column::new("TIP", 30), Column::new("", 40), Column::new("0.00", 30)],
            PrintSize::NORMAL,
            false,
        )
        .text("AMOUNT: NPR 370.00", PrintSize::AMOUNT, true, Alignment::Center)
        .text("CARDHOLDER SIGNATURE", PrintSize::SMALL, false, Alignment::Left)
        .feed(PrintSize::SIGN_FEED)
        .text(
            "I ACKNOWLEDGE SATISFACTORY RECEIPT OF RELATIVE GOODS/SERVICES",
            PrintSize::SMALL,
            false,
            Alignment::Left,
        )
        .feed(PrintSize::TAIL_FEED);
    builder.finish()
}

/// List available receipt names.
pub fn list_receipts() -> &'static [&'static str] {
    RECEIPTS
}

/// Render a receipt by name.
pub fn by_name<F: FontMetrics>(
    name: &str,
    paper: PaperWidth,
    font: F,
    logo: Option<&RgbaImage>,
) -> Option<Receipt> {
    match name.to_lowercase().as_str() {
        "print-test" | "print_test" | "test" => Some(print_test(paper, font)),
        "sales-slip" | "sales_slip" | "sale" => Some(sales_slip(paper, font, logo)),
        _ => None,
    }
}

/// Check if a name is a receipt template
pub fn is_receipt(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "print-test" | "print_test" | "test" | "sales-slip" | "sales_slip" | "sale"
    )
}

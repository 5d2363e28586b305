//! Plain-text rendering of the catalog and the cart.

use std::fmt::Write;

use crate::ui::cart::CartState;

/// Render the whole view: catalog, cart, and the fetch error if any.
pub fn render(state: &CartState) -> String {
    let mut out = String::new();
    render_products(&mut out, state);
    out.push('\n');
    render_cart(&mut out, state);
    if let Some(error) = &state.error {
        out.push('\n');
        let _ = writeln!(out, "! {}", error);
    }
    out
}

fn render_products(out: &mut String, state: &CartState) {
    let _ = writeln!(out, "== Products ({}) ==", state.products.len());
    if state.products.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    for product in &state.products {
        let _ = writeln!(
            out,
            "  [{}] {}  ${:.2}",
            product.id, product.title, product.price
        );
    }
}

fn render_cart(out: &mut String, state: &CartState) {
    let _ = writeln!(
        out,
        "== Cart ({} items, ${:.2}) ==",
        state.item_count(),
        state.cart_total()
    );
    if state.cart.is_empty() {
        out.push_str("  (empty)\n");
        return;
    }
    for line in &state.cart {
        let _ = writeln!(
            out,
            "  [{}] {}  Quantity: {}",
            line.id(),
            line.product.title,
            line.quantity
        );
    }
}

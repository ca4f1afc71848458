//! Table cell for money values
//!
//! ```rust,ignore
//! <TableCellMoney value=product.precio />
//! <TableCellMoney value=sale.total bold=true />
//! ```

use super::number_format::format_currency;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned `$1,234.56` cell.
#[component]
pub fn TableCellMoney(
    value: f64,
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let style = if bold { "font-weight: 600" } else { "" };

    view! {
        <TableCell class="text-right">
            <span style=style>{format_currency(value)}</span>
        </TableCell>
    }
}

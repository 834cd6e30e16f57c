//! Table rendering for all records matching a service name.

use comfy_table::{Table, presets};

use crate::domain::ServiceRecord;
use crate::domain::resolution::matching;

pub const HEADER: [&str; 5] = ["Namespace", "Name", "NodePort", "Route-URL", "Weight"];

/// Render one row per record named `name`, across every namespace present.
pub fn render_table(records: &[ServiceRecord], name: &str, host_address: &str) -> String {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_FULL);
    table.set_header(HEADER);

    for record in matching(records, name) {
        table.add_row(vec![
            record.namespace.clone(),
            record.name.clone(),
            record.node_port_address(host_address).unwrap_or_default(),
            record.route_urls.join("\n"),
            record.weights.join("\n"),
        ]);
    }

    table.to_string()
}

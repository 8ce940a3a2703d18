mod table;

pub use table::{Consulate, ConsulateId, ConsulateLink, ConsulateTable, FALLBACK_URL};

//! Ledger-entry resolution

use std::collections::HashMap;

use stellar_xdr::curr::{LedgerEntryData, LedgerKey};
use tracing::warn;

use crate::error::Error;
use crate::rpc::protocol::GetLedgerEntriesRequest;
use crate::wire;

use super::Executor;

impl Executor {
    /// Fetch and decode the ledger entries for `ledger_keys` in one batch.
    ///
    /// Each response entry is decoded and correlated back to the requested
    /// keys in request order: the response is expected to be a subsequence of
    /// the request, since the server omits absent slots. An entry that
    /// matches no pending requested key is dropped from the result with a
    /// warning rather than recorded under a wrong key. Requested keys with no
    /// surviving entry are simply absent from the map; that is not an error.
    pub async fn resolve_ledger_entries(
        &self,
        ledger_keys: &[LedgerKey],
    ) -> Result<HashMap<LedgerKey, LedgerEntryData>, Error> {
        let mut keys = Vec::with_capacity(ledger_keys.len());
        for (index, ledger_key) in ledger_keys.iter().enumerate() {
            let encoded = wire::to_base64(ledger_key)
                .map_err(|source| Error::KeyEncode { index, source })?;
            keys.push(encoded);
        }

        let response = self
            .rpc
            .get_ledger_entries(GetLedgerEntriesRequest { keys })
            .await?;

        let mut entries = HashMap::with_capacity(response.entries.len());
        let mut pending = ledger_keys.iter();
        for (index, entry) in response.entries.iter().enumerate() {
            let decoded_key: LedgerKey = wire::from_base64(&entry.key)
                .map_err(|source| Error::EntryDecode { index, source })?;

            // Scan forward to the matching requested key, stepping over
            // requested keys the server omitted.
            if !pending.by_ref().any(|requested| *requested == decoded_key) {
                warn!(index, "ledger entry matches no pending requested key, dropped");
                continue;
            }

            let data: LedgerEntryData = wire::from_base64(&entry.xdr)
                .map_err(|source| Error::EntryDecode { index, source })?;
            entries.insert(decoded_key, data);
        }

        Ok(entries)
    }
}

//! Invocation transaction assembly
//!
//! Builds the single-operation transaction that invokes a contract function:
//! one invoke-host-function operation carrying the target address, the
//! function symbol, and the argument list. Construction is pure; nothing here
//! touches the network.

use stellar_xdr::curr::{
    HostFunction, InvokeContractArgs, InvokeHostFunctionOp, Memo, Operation, OperationBody,
    Preconditions, ScAddress, ScSymbol, ScVal, SequenceNumber, Transaction, TransactionEnvelope,
    TransactionExt, TransactionV1Envelope, VecM,
};

use crate::error::Error;
use crate::types::SourceAccount;

/// Minimum per-operation base fee, in stroops.
pub const MIN_BASE_FEE: u32 = 100;

/// Assemble an unsigned transaction invoking `function_name` on the contract
/// at `contract_address` with the given arguments.
///
/// The transaction consumes the source account's next sequence number and
/// carries exactly one operation.
pub fn build_invocation_tx(
    contract_address: &ScAddress,
    source_account: &SourceAccount,
    args: Vec<ScVal>,
    function_name: &str,
    base_fee: u32,
) -> Result<Transaction, Error> {
    let function_symbol = ScSymbol(function_name.try_into().map_err(|_| {
        Error::build(format!(
            "function name {function_name:?} exceeds the symbol bound"
        ))
    })?);

    let invocation = InvokeContractArgs {
        contract_address: contract_address.clone(),
        function_name: function_symbol,
        args: args
            .try_into()
            .map_err(|_| Error::build("argument list exceeds the XDR vector bound"))?,
    };

    let operation = Operation {
        source_account: None,
        body: OperationBody::InvokeHostFunction(InvokeHostFunctionOp {
            host_function: HostFunction::InvokeContract(invocation),
            auth: VecM::default(),
        }),
    };

    let operations: VecM<Operation, 100> = vec![operation]
        .try_into()
        .map_err(|_| Error::build("operation list exceeds the transaction bound"))?;

    let sequence = source_account
        .sequence()
        .checked_add(1)
        .ok_or_else(|| Error::build("source account sequence exhausted"))?;

    Ok(Transaction {
        source_account: source_account.muxed_account(),
        fee: base_fee,
        seq_num: SequenceNumber(sequence),
        cond: Preconditions::None,
        memo: Memo::None,
        operations,
        ext: TransactionExt::V0,
    })
}

/// Wrap an unsigned transaction in the v1 envelope the wire format expects.
///
/// Simulation submits this envelope without signatures; the signing pipeline
/// produces the signed equivalent.
pub fn into_envelope(tx: Transaction) -> TransactionEnvelope {
    TransactionEnvelope::Tx(TransactionV1Envelope {
        tx,
        signatures: VecM::default(),
    })
}

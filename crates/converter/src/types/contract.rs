// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::{Asset, HexBytes, LedgerFootprint};
use crate::chain::{Extension, ExtensionLevel, ExtensionPoint};
use crate::wide::{I128Parts, I256Parts, U128Parts, U256Parts};

/// Structural rendering of a contract value.
///
/// `type` names the active arm and exactly the matching slot is set.
/// `void` and `ledger_key_contract_instance` carry no slot, nor does a
/// `vec` or `map` that is absent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScVal {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ScError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u32: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i32: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u64: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i64: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timepoint: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u128: Option<U128Parts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i128: Option<I128Parts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u256: Option<U256Parts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i256: Option<I256Parts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<HexBytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub str: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sym: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vec: Option<Vec<ScVal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<Vec<ScMapEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<ScAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce_key: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<ScContractInstance>,
}

impl ScVal {
    /// Number of populated payload slots.
    pub fn populated_slots(&self) -> usize {
        [
            self.b.is_some(),
            self.error.is_some(),
            self.u32.is_some(),
            self.i32.is_some(),
            self.u64.is_some(),
            self.i64.is_some(),
            self.timepoint.is_some(),
            self.duration.is_some(),
            self.u128.is_some(),
            self.i128.is_some(),
            self.u256.is_some(),
            self.i256.is_some(),
            self.bytes.is_some(),
            self.str.is_some(),
            self.sym.is_some(),
            self.vec.is_some(),
            self.map.is_some(),
            self.address.is_some(),
            self.nonce_key.is_some(),
            self.instance.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScMapEntry {
    pub key: ScVal,
    pub val: ScVal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScAddress {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScContractInstance {
    pub executable: ContractExecutable,
    pub storage: Option<Vec<ScMapEntry>>,
}

/// Builder-compatible projection of a contract value.
///
/// `value` is the literal that, paired with `type`, rebuilds the value via
/// [`crate::builder::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScValInfo {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractExecutable {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wasm_hash: Option<HexBytes>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractIdPreimage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<ContractIdPreimageFromAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_asset: Option<Asset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContractIdPreimageFromAddress {
    pub address: ScAddress,
    pub salt: HexBytes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostFunction {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoke_contract: Option<InvokeContractArgs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_contract: Option<CreateContractArgs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wasm: Option<HexBytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_contract_v2: Option<CreateContractArgs>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeContractArgs {
    pub contract_address: ScAddress,
    pub function_name: String,
    pub args: Vec<ScVal>,
}

/// Arguments of both contract creation flavours; only the second carries
/// constructor arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractArgs {
    pub contract_id_preimage: ContractIdPreimage,
    pub executable: ContractExecutable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor_args: Option<Vec<ScVal>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SorobanAuthorizationEntry {
    pub credentials: SorobanCredentials,
    pub root_invocation: SorobanAuthorizedInvocation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SorobanCredentials {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<SorobanAddressCredentials>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SorobanAddressCredentials {
    pub address: ScAddress,
    pub nonce: i64,
    pub signature_expiration_ledger: u32,
    pub signature: ScVal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SorobanAuthorizedInvocation {
    pub function: SorobanAuthorizedFunction,
    pub sub_invocations: Vec<SorobanAuthorizedInvocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SorobanAuthorizedFunction {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_fn: Option<InvokeContractArgs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_contract_host_fn: Option<CreateContractArgs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_contract_v2_host_fn: Option<CreateContractArgs>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SorobanTransactionData {
    pub ext: ExtensionPoint,
    pub resources: SorobanResources,
    pub resource_fee: i64,
}

impl ExtensionLevel for SorobanTransactionData {
    const VERSION: i32 = 1;
    const KEY: &'static str = "sorobanData";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SorobanResources {
    pub footprint: LedgerFootprint,
    pub instructions: u32,
    pub read_bytes: u32,
    pub write_bytes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractEvent {
    pub ext: ExtensionPoint,
    pub contract_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub body: ContractEventBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContractEventBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v0: Option<ContractEventV0>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContractEventV0 {
    pub topics: Vec<ScVal>,
    pub data: ScVal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticEvent {
    pub in_successful_contract_call: bool,
    pub event: ContractEvent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContractDataEntry {
    pub ext: ExtensionPoint,
    pub contract: ScAddress,
    pub key: ScVal,
    pub durability: &'static str,
    pub val: ScVal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContractCodeEntry {
    pub ext: Extension<ContractCodeEntryV1>,
    pub hash: HexBytes,
    pub code: HexBytes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCodeEntryV1 {
    pub ext: ExtensionPoint,
    pub cost_inputs: ContractCodeCostInputs,
}

impl ExtensionLevel for ContractCodeEntryV1 {
    const VERSION: i32 = 1;
    const KEY: &'static str = "v1";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCodeCostInputs {
    pub ext: ExtensionPoint,
    pub n_instructions: u32,
    pub n_functions: u32,
    pub n_globals: u32,
    pub n_table_entries: u32,
    pub n_types: u32,
    pub n_data_segments: u32,
    pub n_elem_segments: u32,
    pub n_imports: u32,
    pub n_exports: u32,
    pub n_data_segment_bytes: u32,
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use stellar_xdr::curr as xdr;

use super::{Converter, convert_all, hex_bytes, text};
use crate::address::AddressCodec;
use crate::chain::{ExtensionPoint, resolve};
use crate::error::Result;
use crate::types::{
    ContractCodeCostInputs, ContractCodeEntry, ContractCodeEntryV1, ContractDataEntry,
    ContractEvent, ContractEventBody, ContractEventV0, ContractExecutable, ContractIdPreimage,
    ContractIdPreimageFromAddress, CreateContractArgs, DiagnosticEvent, HexBytes, HostFunction,
    InvokeContractArgs, ScAddress, ScContractInstance, ScError, ScMapEntry, ScVal,
    SorobanAddressCredentials, SorobanAuthorizationEntry, SorobanAuthorizedFunction,
    SorobanAuthorizedInvocation, SorobanCredentials, SorobanResources, SorobanTransactionData,
};

impl<A: AddressCodec> Converter<A> {
    pub fn sc_val(&self, val: &xdr::ScVal) -> Result<ScVal> {
        let val = match val {
            xdr::ScVal::Bool(b) => ScVal {
                kind: "bool",
                b: Some(*b),
                ..Default::default()
            },
            xdr::ScVal::Void => ScVal {
                kind: "void",
                ..Default::default()
            },
            xdr::ScVal::Error(error) => ScVal {
                kind: "error",
                error: Some(sc_error(error)),
                ..Default::default()
            },
            xdr::ScVal::U32(n) => ScVal {
                kind: "u32",
                u32: Some(*n),
                ..Default::default()
            },
            xdr::ScVal::I32(n) => ScVal {
                kind: "i32",
                i32: Some(*n),
                ..Default::default()
            },
            xdr::ScVal::U64(n) => ScVal {
                kind: "u64",
                u64: Some(*n),
                ..Default::default()
            },
            xdr::ScVal::I64(n) => ScVal {
                kind: "i64",
                i64: Some(*n),
                ..Default::default()
            },
            xdr::ScVal::Timepoint(t) => ScVal {
                kind: "timepoint",
                timepoint: Some(t.0),
                ..Default::default()
            },
            xdr::ScVal::Duration(d) => ScVal {
                kind: "duration",
                duration: Some(d.0),
                ..Default::default()
            },
            xdr::ScVal::U128(parts) => ScVal {
                kind: "u128",
                u128: Some(parts.into()),
                ..Default::default()
            },
            xdr::ScVal::I128(parts) => ScVal {
                kind: "i128",
                i128: Some(parts.into()),
                ..Default::default()
            },
            xdr::ScVal::U256(parts) => ScVal {
                kind: "u256",
                u256: Some(parts.into()),
                ..Default::default()
            },
            xdr::ScVal::I256(parts) => ScVal {
                kind: "i256",
                i256: Some(parts.into()),
                ..Default::default()
            },
            xdr::ScVal::Bytes(bytes) => ScVal {
                kind: "bytes",
                bytes: Some(hex_bytes(bytes.0.as_slice())),
                ..Default::default()
            },
            xdr::ScVal::String(s) => ScVal {
                kind: "string",
                str: Some(text(s.0.as_slice())),
                ..Default::default()
            },
            xdr::ScVal::Symbol(sym) => ScVal {
                kind: "symbol",
                sym: Some(text(sym.0.as_slice())),
                ..Default::default()
            },
            xdr::ScVal::Vec(items) => ScVal {
                kind: "vec",
                vec: items
                    .as_ref()
                    .map(|items| convert_all(&items.0, |item| self.sc_val(item)))
                    .transpose()?,
                ..Default::default()
            },
            xdr::ScVal::Map(entries) => ScVal {
                kind: "map",
                map: entries
                    .as_ref()
                    .map(|entries| self.sc_map(&entries.0))
                    .transpose()?,
                ..Default::default()
            },
            xdr::ScVal::Address(address) => ScVal {
                kind: "address",
                address: Some(self.sc_address(address)?),
                ..Default::default()
            },
            xdr::ScVal::LedgerKeyContractInstance => ScVal {
                kind: "ledger_key_contract_instance",
                ..Default::default()
            },
            xdr::ScVal::LedgerKeyNonce(key) => ScVal {
                kind: "ledger_key_nonce",
                nonce_key: Some(key.nonce),
                ..Default::default()
            },
            xdr::ScVal::ContractInstance(instance) => ScVal {
                kind: "contract_instance",
                instance: Some(ScContractInstance {
                    executable: contract_executable(&instance.executable),
                    storage: instance
                        .storage
                        .as_ref()
                        .map(|storage| self.sc_map(&storage.0))
                        .transpose()?,
                }),
                ..Default::default()
            },
        };
        Ok(val)
    }

    fn sc_map(&self, entries: &[xdr::ScMapEntry]) -> Result<Vec<ScMapEntry>> {
        convert_all(entries, |entry| {
            Ok(ScMapEntry {
                key: self.sc_val(&entry.key)?,
                val: self.sc_val(&entry.val)?,
            })
        })
    }

    pub fn sc_address(&self, address: &xdr::ScAddress) -> Result<ScAddress> {
        match address {
            xdr::ScAddress::Account(id) => Ok(ScAddress {
                kind: "account",
                account_id: Some(self.account_id(id)?),
                contract_id: None,
            }),
            xdr::ScAddress::Contract(hash) => Ok(ScAddress {
                kind: "contract",
                account_id: None,
                contract_id: Some(self.contract_id(hash)?),
            }),
        }
    }

    pub fn contract_id_preimage(
        &self,
        preimage: &xdr::ContractIdPreimage,
    ) -> Result<ContractIdPreimage> {
        match preimage {
            xdr::ContractIdPreimage::Address(from) => Ok(ContractIdPreimage {
                kind: "address",
                from_address: Some(ContractIdPreimageFromAddress {
                    address: self.sc_address(&from.address)?,
                    salt: HexBytes::from(from.salt.0),
                }),
                ..Default::default()
            }),
            xdr::ContractIdPreimage::Asset(asset) => Ok(ContractIdPreimage {
                kind: "asset",
                from_asset: Some(self.asset(asset)?),
                ..Default::default()
            }),
        }
    }

    pub fn host_function(&self, function: &xdr::HostFunction) -> Result<HostFunction> {
        match function {
            xdr::HostFunction::InvokeContract(args) => Ok(HostFunction {
                kind: "invoke_contract",
                invoke_contract: Some(self.invoke_contract_args(args)?),
                ..Default::default()
            }),
            xdr::HostFunction::CreateContract(args) => Ok(HostFunction {
                kind: "create_contract",
                create_contract: Some(self.create_contract_args(args)?),
                ..Default::default()
            }),
            xdr::HostFunction::UploadContractWasm(wasm) => Ok(HostFunction {
                kind: "upload_contract_wasm",
                wasm: Some(hex_bytes(wasm.as_slice())),
                ..Default::default()
            }),
            xdr::HostFunction::CreateContractV2(args) => Ok(HostFunction {
                kind: "create_contract_v2",
                create_contract_v2: Some(self.create_contract_args_v2(args)?),
                ..Default::default()
            }),
        }
    }

    fn invoke_contract_args(&self, args: &xdr::InvokeContractArgs) -> Result<InvokeContractArgs> {
        Ok(InvokeContractArgs {
            contract_address: self.sc_address(&args.contract_address)?,
            function_name: text(args.function_name.0.as_slice()),
            args: convert_all(&args.args, |arg| self.sc_val(arg))?,
        })
    }

    fn create_contract_args(&self, args: &xdr::CreateContractArgs) -> Result<CreateContractArgs> {
        Ok(CreateContractArgs {
            contract_id_preimage: self.contract_id_preimage(&args.contract_id_preimage)?,
            executable: contract_executable(&args.executable),
            constructor_args: None,
        })
    }

    fn create_contract_args_v2(
        &self,
        args: &xdr::CreateContractArgsV2,
    ) -> Result<CreateContractArgs> {
        Ok(CreateContractArgs {
            contract_id_preimage: self.contract_id_preimage(&args.contract_id_preimage)?,
            executable: contract_executable(&args.executable),
            constructor_args: Some(convert_all(&args.constructor_args, |arg| self.sc_val(arg))?),
        })
    }

    pub fn soroban_authorization_entry(
        &self,
        entry: &xdr::SorobanAuthorizationEntry,
    ) -> Result<SorobanAuthorizationEntry> {
        let credentials = match &entry.credentials {
            xdr::SorobanCredentials::SourceAccount => SorobanCredentials {
                kind: "source_account",
                address: None,
            },
            xdr::SorobanCredentials::Address(creds) => SorobanCredentials {
                kind: "address",
                address: Some(SorobanAddressCredentials {
                    address: self.sc_address(&creds.address)?,
                    nonce: creds.nonce,
                    signature_expiration_ledger: creds.signature_expiration_ledger,
                    signature: self.sc_val(&creds.signature)?,
                }),
            },
        };

        Ok(SorobanAuthorizationEntry {
            credentials,
            root_invocation: self.authorized_invocation(&entry.root_invocation)?,
        })
    }

    fn authorized_invocation(
        &self,
        invocation: &xdr::SorobanAuthorizedInvocation,
    ) -> Result<SorobanAuthorizedInvocation> {
        let function = match &invocation.function {
            xdr::SorobanAuthorizedFunction::ContractFn(args) => SorobanAuthorizedFunction {
                kind: "contract_fn",
                contract_fn: Some(self.invoke_contract_args(args)?),
                ..Default::default()
            },
            xdr::SorobanAuthorizedFunction::CreateContractHostFn(args) => {
                SorobanAuthorizedFunction {
                    kind: "create_contract_host_fn",
                    create_contract_host_fn: Some(self.create_contract_args(args)?),
                    ..Default::default()
                }
            }
            xdr::SorobanAuthorizedFunction::CreateContractV2HostFn(args) => {
                SorobanAuthorizedFunction {
                    kind: "create_contract_v2_host_fn",
                    create_contract_v2_host_fn: Some(self.create_contract_args_v2(args)?),
                    ..Default::default()
                }
            }
        };

        Ok(SorobanAuthorizedInvocation {
            function,
            sub_invocations: convert_all(&invocation.sub_invocations, |sub| {
                self.authorized_invocation(sub)
            })?,
        })
    }

    pub fn soroban_transaction_data(
        &self,
        data: &xdr::SorobanTransactionData,
    ) -> Result<SorobanTransactionData> {
        Ok(SorobanTransactionData {
            ext: ExtensionPoint::of(&data.ext),
            resources: SorobanResources {
                footprint: self.ledger_footprint(&data.resources.footprint)?,
                instructions: data.resources.instructions,
                read_bytes: data.resources.read_bytes,
                write_bytes: data.resources.write_bytes,
            },
            resource_fee: data.resource_fee,
        })
    }

    pub fn contract_event(&self, event: &xdr::ContractEvent) -> Result<ContractEvent> {
        let kind = match event.type_ {
            xdr::ContractEventType::System => "system",
            xdr::ContractEventType::Contract => "contract",
            xdr::ContractEventType::Diagnostic => "diagnostic",
        };
        let body = match &event.body {
            xdr::ContractEventBody::V0(v0) => ContractEventBody {
                kind: "v0",
                v0: Some(ContractEventV0 {
                    topics: convert_all(&v0.topics, |topic| self.sc_val(topic))?,
                    data: self.sc_val(&v0.data)?,
                }),
            },
        };

        Ok(ContractEvent {
            ext: ExtensionPoint::of(&event.ext),
            contract_id: event
                .contract_id
                .as_ref()
                .map(|id| self.contract_id(id))
                .transpose()?,
            kind,
            body,
        })
    }

    pub fn diagnostic_event(&self, event: &xdr::DiagnosticEvent) -> Result<DiagnosticEvent> {
        Ok(DiagnosticEvent {
            in_successful_contract_call: event.in_successful_contract_call,
            event: self.contract_event(&event.event)?,
        })
    }

    pub fn contract_data_entry(&self, entry: &xdr::ContractDataEntry) -> Result<ContractDataEntry> {
        Ok(ContractDataEntry {
            ext: ExtensionPoint::of(&entry.ext),
            contract: self.sc_address(&entry.contract)?,
            key: self.sc_val(&entry.key)?,
            durability: durability(entry.durability),
            val: self.sc_val(&entry.val)?,
        })
    }

    pub fn contract_code_entry(&self, entry: &xdr::ContractCodeEntry) -> Result<ContractCodeEntry> {
        Ok(ContractCodeEntry {
            ext: resolve(&entry.ext, |v1| {
                Ok(ContractCodeEntryV1 {
                    ext: ExtensionPoint::of(&v1.ext),
                    cost_inputs: cost_inputs(&v1.cost_inputs),
                })
            })?,
            hash: HexBytes::from(&entry.hash),
            code: hex_bytes(entry.code.as_slice()),
        })
    }
}

pub(crate) fn sc_error(error: &xdr::ScError) -> ScError {
    let (kind, code) = match error {
        xdr::ScError::Contract(code) => {
            return ScError {
                kind: "contract",
                contract_code: Some(*code),
                code: None,
            };
        }
        xdr::ScError::WasmVm(code) => ("wasm_vm", code),
        xdr::ScError::Context(code) => ("context", code),
        xdr::ScError::Storage(code) => ("storage", code),
        xdr::ScError::Object(code) => ("object", code),
        xdr::ScError::Crypto(code) => ("crypto", code),
        xdr::ScError::Events(code) => ("events", code),
        xdr::ScError::Budget(code) => ("budget", code),
        xdr::ScError::Value(code) => ("value", code),
        xdr::ScError::Auth(code) => ("auth", code),
    };
    ScError {
        kind,
        contract_code: None,
        code: Some(code.name()),
    }
}

pub(crate) fn contract_executable(executable: &xdr::ContractExecutable) -> ContractExecutable {
    match executable {
        xdr::ContractExecutable::Wasm(hash) => ContractExecutable {
            kind: "wasm",
            wasm_hash: Some(HexBytes::from(hash)),
        },
        xdr::ContractExecutable::StellarAsset => ContractExecutable {
            kind: "stellar_asset",
            wasm_hash: None,
        },
    }
}

pub(crate) fn durability(durability: xdr::ContractDataDurability) -> &'static str {
    match durability {
        xdr::ContractDataDurability::Temporary => "temporary",
        xdr::ContractDataDurability::Persistent => "persistent",
    }
}

fn cost_inputs(inputs: &xdr::ContractCodeCostInputs) -> ContractCodeCostInputs {
    ContractCodeCostInputs {
        ext: ExtensionPoint::of(&inputs.ext),
        n_instructions: inputs.n_instructions,
        n_functions: inputs.n_functions,
        n_globals: inputs.n_globals,
        n_table_entries: inputs.n_table_entries,
        n_types: inputs.n_types,
        n_data_segments: inputs.n_data_segments,
        n_elem_segments: inputs.n_elem_segments,
        n_imports: inputs.n_imports,
        n_exports: inputs.n_exports,
        n_data_segment_bytes: inputs.n_data_segment_bytes,
    }
}

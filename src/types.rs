multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal State — derived from the voting window, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalState {
    /// The voting window has not opened yet.
    Pending,
    /// Voting is open: start_time <= now <= end_time.
    Active,
    /// The voting window is over. Tallies are final.
    Closed,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    /// Opaque pointer to the proposal text (e.g. an IPFS URL). Uninterpreted.
    pub content_ref: ManagedBuffer<M>,
    pub start_time: u64,
    pub end_time: u64,
    pub yea_weight: BigUint<M>,
    pub nay_weight: BigUint<M>,
    pub created_at: u64,
}

// ============================================================
// Vote Record — append-only audit trail entry
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum VoteDirection {
    Yea,
    Nay,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub direction: VoteDirection,
    /// Voting weight resolved at cast time. Later weight changes in the
    /// membership contract do not touch this record.
    pub weight: BigUint<M>,
}

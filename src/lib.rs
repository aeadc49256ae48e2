#![no_std]

multiversx_sc::imports!();

pub mod membership_proxy;
pub mod types;
pub mod voting_proxy;

use types::{Proposal, ProposalState, VoteDirection, VoteRecord};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait DaoVoting {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// One deployment serves exactly one DAO. The membership contract
    /// answers `isMember` / `votingWeightOf` and is immutable afterwards,
    /// as is the proposal-creation policy.
    #[init]
    fn init(&self, membership_address: ManagedAddress, member_gated_proposals: bool) {
        self.membership_address().set(&membership_address);
        self.member_gated_proposals().set(member_gated_proposals);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Voting window is fixed at creation and validated against
    // the current block timestamp.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        start_time: u64,
        end_time: u64,
        content_ref: ManagedBuffer,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        if self.member_gated_proposals().get() {
            require!(self.is_dao_member(&caller), "Only members can propose");
        }

        let now = self.blockchain().get_block_timestamp();
        require!(start_time > now, "Proposal cannot start in the past");
        require!(end_time > start_time, "End time must be after start time");

        let proposal_id = self.proposal_count().get();

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            content_ref,
            start_time,
            end_time,
            yea_weight: BigUint::zero(),
            nay_weight: BigUint::zero(),
            created_at: now,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_created_event(proposal_id, &caller, start_time, end_time);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Yea/Nay voting weighted by the membership contract's answer
    // at cast time. One ballot per member per proposal.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        require!(
            proposal_id < self.proposal_count().get(),
            "Proposal does not exist"
        );

        let mut proposal = self.proposals(proposal_id).get();
        let now = self.blockchain().get_block_timestamp();
        let state = self.state_of(&proposal, now);
        require!(state != ProposalState::Pending, "Voting has not started");
        require!(state != ProposalState::Closed, "Voting period has expired");

        require!(self.is_dao_member(&caller), "Not a member of the DAO");
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            "Already voted"
        );

        // Weight is captured here, once. A later weight change in the
        // membership contract leaves this proposal's tally untouched.
        let weight = self.resolve_voting_weight(&caller);

        let direction = if support {
            proposal.yea_weight += &weight;
            VoteDirection::Yea
        } else {
            proposal.nay_weight += &weight;
            VoteDirection::Nay
        };

        let record = VoteRecord {
            voter: caller.clone(),
            direction,
            weight: weight.clone(),
        };
        self.vote_records(proposal_id).push(&record);
        self.has_voted(proposal_id, &caller).set(true);
        self.proposals(proposal_id).set(&proposal);

        self.vote_cast_event(proposal_id, &caller, support, &weight);
    }

    // ========================================================
    // INTERNAL: time-window classification
    // Recomputed from the block timestamp on every call; the
    // state is never stored and cannot go stale.
    // ========================================================

    fn state_of(&self, proposal: &Proposal<Self::Api>, now: u64) -> ProposalState {
        if now < proposal.start_time {
            ProposalState::Pending
        } else if now <= proposal.end_time {
            ProposalState::Active
        } else {
            ProposalState::Closed
        }
    }

    // ========================================================
    // INTERNAL: membership contract queries
    // ========================================================

    fn is_dao_member(&self, address: &ManagedAddress) -> bool {
        let membership_addr = self.membership_address().get();
        self.tx()
            .to(&membership_addr)
            .typed(membership_proxy::MembershipProxy)
            .is_member(address.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn resolve_voting_weight(&self, address: &ManagedAddress) -> BigUint {
        let membership_addr = self.membership_address().get();
        self.tx()
            .to(&membership_addr)
            .typed(membership_proxy::MembershipProxy)
            .voting_weight_of(address.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            proposal_id < self.proposal_count().get(),
            "Proposal does not exist"
        );
        self.proposals(proposal_id).get()
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: u64) -> ProposalState {
        require!(
            proposal_id < self.proposal_count().get(),
            "Proposal does not exist"
        );
        let proposal = self.proposals(proposal_id).get();
        let now = self.blockchain().get_block_timestamp();
        self.state_of(&proposal, now)
    }

    #[view(getActiveProposalIds)]
    fn get_active_proposal_ids(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let now = self.blockchain().get_block_timestamp();

        for proposal_id in 0..total {
            let proposal = self.proposals(proposal_id).get();
            if self.state_of(&proposal, now) == ProposalState::Active {
                result.push(proposal_id);
            }
        }
        result
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for proposal_id in from..end {
            result.push(self.proposals(proposal_id).get());
        }
        result
    }

    #[view(getTally)]
    fn get_tally(&self, proposal_id: u64) -> MultiValue2<BigUint, BigUint> {
        require!(
            proposal_id < self.proposal_count().get(),
            "Proposal does not exist"
        );
        let proposal = self.proposals(proposal_id).get();
        (proposal.yea_weight, proposal.nay_weight).into()
    }

    #[view(getVoteRecords)]
    fn get_vote_records(&self, proposal_id: u64) -> MultiValueEncoded<VoteRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let count = self.vote_records(proposal_id).len();
        for i in 1..=count {
            result.push(self.vote_records(proposal_id).get(i));
        }
        result
    }

    #[view(hasVoted)]
    fn has_member_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, voter).get()
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue2<ManagedAddress, bool> {
        let membership = self.membership_address().get();
        let gated = self.member_gated_proposals().get();
        (membership, gated).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] start_time: u64,
        end_time: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("membershipAddress")]
    fn membership_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("memberGatedProposals")]
    fn member_gated_proposals(&self) -> SingleValueMapper<bool>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    // ── Vote ledger ──

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("voteRecords")]
    fn vote_records(&self, proposal_id: u64) -> VecMapper<VoteRecord<Self::Api>>;
}

#![no_std]

multiversx_sc::imports!();

pub mod mock_membership_proxy;

/// Minimal membership contract used as the resolver in voting tests.
/// Members and their voting weights are plain fixtures that tests can
/// mutate between calls.
#[multiversx_sc::contract]
pub trait MockMembership {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(addMember)]
    fn add_member(&self, member: ManagedAddress, weight: BigUint) {
        self.member_weight(&member).set(&weight);
        self.members().insert(member);
    }

    #[endpoint(removeMember)]
    fn remove_member(&self, member: ManagedAddress) {
        self.member_weight(&member).clear();
        self.members().swap_remove(&member);
    }

    #[endpoint(setVotingWeight)]
    fn set_voting_weight(&self, member: ManagedAddress, weight: BigUint) {
        self.member_weight(&member).set(&weight);
    }

    #[view(isMember)]
    fn is_member(&self, address: ManagedAddress) -> bool {
        self.members().contains(&address)
    }

    #[view(votingWeightOf)]
    fn voting_weight_of(&self, address: ManagedAddress) -> BigUint {
        self.member_weight(&address).get()
    }

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("memberWeight")]
    fn member_weight(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;
}

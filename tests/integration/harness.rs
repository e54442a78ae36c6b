//! Reusable sale fixture
//!
//! Deploys the offering contract next to three freshly issued Stellar asset
//! contracts (raising, offering, collateral), funds the sale with the full
//! offering amount, and exposes helpers for minting participant balances and
//! moving the ledger clock.

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

use ifo::{IfoContract, IfoContractClient};

// Reference sale parameters from the original offering deployment:
// window [10, 20], 1M offered against a 5M cap, 5k collateral stake.
pub const START_LEDGER: u32 = 10;
pub const END_LEDGER: u32 = 20;
pub const OFFERING_AMOUNT: i128 = 1_000_000;
pub const RAISING_AMOUNT: i128 = 5_000_000;
pub const REQUIRED_COLLATERAL: i128 = 5_000;

pub struct SaleFixture {
    pub env: Env,
    pub client: IfoContractClient<'static>,
    pub admin: Address,
    pub raising: TokenClient<'static>,
    pub offering: TokenClient<'static>,
    pub collateral: TokenClient<'static>,
    raising_mint: StellarAssetClient<'static>,
    collateral_mint: StellarAssetClient<'static>,
}

impl SaleFixture {
    /// Fixture with the reference parameters.
    pub fn setup() -> Self {
        Self::setup_with_amounts(OFFERING_AMOUNT, RAISING_AMOUNT)
    }

    /// Fixture with a custom offering/raising pair, for cap-sensitive tests.
    pub fn setup_with_amounts(offering_amount: i128, raising_amount: i128) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let raising_id = env.register_stellar_asset_contract_v2(admin.clone());
        let offering_id = env.register_stellar_asset_contract_v2(admin.clone());
        let collateral_id = env.register_stellar_asset_contract_v2(admin.clone());

        let contract_id = env.register_contract(None, IfoContract);
        let client = IfoContractClient::new(&env, &contract_id);

        client.initialize(
            &raising_id.address(),
            &offering_id.address(),
            &START_LEDGER,
            &END_LEDGER,
            &offering_amount,
            &raising_amount,
            &admin,
            &collateral_id.address(),
            &REQUIRED_COLLATERAL,
        );

        StellarAssetClient::new(&env, &offering_id.address())
            .mint(&contract_id, &offering_amount);

        SaleFixture {
            raising: TokenClient::new(&env, &raising_id.address()),
            offering: TokenClient::new(&env, &offering_id.address()),
            collateral: TokenClient::new(&env, &collateral_id.address()),
            raising_mint: StellarAssetClient::new(&env, &raising_id.address()),
            collateral_mint: StellarAssetClient::new(&env, &collateral_id.address()),
            env,
            client,
            admin,
        }
    }

    /// Moves the ledger clock to an absolute sequence number.
    pub fn jump_to(&self, sequence: u32) {
        self.env.ledger().with_mut(|li| li.sequence_number = sequence);
    }

    /// A fresh participant holding `raising` tokens plus the collateral stake.
    pub fn participant(&self, raising: i128) -> Address {
        let user = Address::generate(&self.env);
        if raising > 0 {
            self.raising_mint.mint(&user, &raising);
        }
        self.collateral_mint.mint(&user, &REQUIRED_COLLATERAL);
        user
    }

    /// A fresh participant with an explicit collateral balance.
    pub fn participant_with_collateral(&self, raising: i128, collateral: i128) -> Address {
        let user = Address::generate(&self.env);
        if raising > 0 {
            self.raising_mint.mint(&user, &raising);
        }
        if collateral > 0 {
            self.collateral_mint.mint(&user, &collateral);
        }
        user
    }

    /// Mints additional collateral to an existing participant.
    pub fn mint_collateral(&self, user: &Address, amount: i128) {
        self.collateral_mint.mint(user, &amount);
    }

    /// Stakes collateral and deposits `amount` for `user`.
    pub fn subscribe(&self, user: &Address, amount: i128) {
        self.client.deposit_collateral(user);
        self.client.deposit(user, &amount);
    }
}

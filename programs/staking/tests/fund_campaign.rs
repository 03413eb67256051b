use anyhow::Result;
use fixed_macro::types::I80F48;
use fixtures::{
    assert_custom_error, native,
    test::{TestFixture, DEFAULT_ANNUAL_RATE_BPS, DEFAULT_CAMPAIGN_REWARD},
    time,
};
use pretty_assertions::assert_eq;
use staking::{
    events::{CampaignFundedEvent, StakingEvent},
    ports::TransferError,
    prelude::*,
};
use test_case::test_case;

#[test]
fn fund_campaign_success() -> Result<()> {
    let mut test_f = TestFixture::new(None);
    let start_time = test_f.now() + time!(1, "m");

    test_f.fund_campaign(start_time, DEFAULT_CAMPAIGN_REWARD, DEFAULT_ANNUAL_RATE_BPS)?;

    let campaign = test_f.campaign();
    assert_eq!(campaign.funder, test_f.admin);
    assert_eq!(campaign.start_time, start_time);
    assert_eq!(campaign.finish_time, start_time + time!(365, "d"));
    assert_eq!(campaign.annual_rate_bps, 1_000);
    assert_eq!(campaign.funded_reward, native!(500_000, "STAKE"));
    assert_eq!(campaign.max_principal, native!(5_000_000, "STAKE"));
    assert_eq!(test_f.engine.max_principal(), native!(5_000_000, "STAKE"));
    assert!(test_f.engine.is_funded());
    assert_eq!(test_f.engine.admin(), test_f.admin);
    assert_eq!(test_f.engine.config(), StakingConfig::default());

    let apr = test_f.engine.apr()?.unwrap();
    assert!((apr - I80F48!(0.1)).abs() < I80F48!(0.000001));

    // Reward moved from the admin into the pool
    assert_eq!(test_f.balance(&test_f.admin), 0);
    assert_eq!(test_f.token.pool_balance(), native!(500_000, "STAKE"));
    assert_eq!(test_f.engine.pool_balance()?, native!(500_000, "STAKE"));

    assert_eq!(
        test_f.events.events(),
        vec![StakingEvent::CampaignFunded(CampaignFundedEvent {
            start_time,
            funded_reward: native!(500_000, "STAKE"),
            annual_rate_bps: 1_000,
            finish_time: start_time + time!(365, "d"),
            max_principal: native!(5_000_000, "STAKE"),
        })]
    );

    Ok(())
}

#[test]
fn fund_campaign_not_admin() -> Result<()> {
    let mut test_f = TestFixture::new(None);
    let intruder = test_f.create_participant(DEFAULT_CAMPAIGN_REWARD);
    let start_time = test_f.now() + time!(1, "m");

    let res = test_f.engine.fund_campaign(
        intruder,
        start_time,
        DEFAULT_CAMPAIGN_REWARD,
        DEFAULT_ANNUAL_RATE_BPS,
    );

    assert_custom_error!(res, StakingError::Unauthorized);
    assert!(!test_f.engine.is_funded());
    assert_eq!(test_f.engine.apr()?, None);
    assert_eq!(test_f.balance(&intruder), DEFAULT_CAMPAIGN_REWARD);
    assert!(test_f.events.is_empty());

    Ok(())
}

#[test]
fn fund_campaign_twice() -> Result<()> {
    let mut test_f = TestFixture::new(None);
    test_f.fund_default_campaign();

    let start_time = test_f.now() + time!(1, "m");
    let res = test_f.fund_campaign(start_time, native!(1_000, "STAKE"), 500);

    assert_custom_error!(res, StakingError::CampaignAlreadyFunded);
    assert_eq!(test_f.campaign().annual_rate_bps, DEFAULT_ANNUAL_RATE_BPS);
    assert_eq!(test_f.token.pool_balance(), DEFAULT_CAMPAIGN_REWARD);
    assert_eq!(test_f.balance(&test_f.admin), native!(1_000, "STAKE"));

    Ok(())
}

#[test]
fn fund_campaign_reward_above_limit() -> Result<()> {
    let mut test_f = TestFixture::new(None);
    let start_time = test_f.now() + time!(1, "m");

    let res = test_f.fund_campaign(start_time, native!(5_000_000, "STAKE"), 1_000);

    assert_custom_error!(res, StakingError::RewardAboveLimit);
    assert_eq!(test_f.token.pool_balance(), 0);

    // Exactly at the ceiling is fine
    let res = test_f.fund_campaign(start_time, native!(500_000, "STAKE"), 1_000);
    assert!(res.is_ok());

    Ok(())
}

#[test]
fn fund_campaign_custom_reward_ceiling() -> Result<()> {
    let mut test_f = TestFixture::new(Some(StakingConfig {
        reward_ceiling: native!(1_000, "STAKE"),
        ..Default::default()
    }));
    let start_time = test_f.now() + time!(1, "m");

    let res = test_f.fund_campaign(start_time, native!(1_001, "STAKE"), 1_000);
    assert_custom_error!(res, StakingError::RewardAboveLimit);

    test_f.fund_campaign(start_time, native!(1_000, "STAKE"), 1_000)?;
    assert_eq!(test_f.engine.max_principal(), native!(10_000, "STAKE"));
    assert!(test_f.engine.apr()?.is_some());

    Ok(())
}

#[test_case(0 ; "start now")]
#[test_case(-1 ; "start in the past")]
fn fund_campaign_start_not_in_future(offset: i64) {
    let mut test_f = TestFixture::new(None);
    let start_time = test_f.now() + offset;

    let res = test_f.fund_campaign(start_time, DEFAULT_CAMPAIGN_REWARD, DEFAULT_ANNUAL_RATE_BPS);

    assert_custom_error!(res, StakingError::InvalidStartTime);
    assert!(!test_f.engine.is_funded());
}

#[test_case(0, 1_000 ; "zero reward")]
#[test_case(native!(500_000, "STAKE"), 0 ; "zero rate")]
fn fund_campaign_zero_parameter(funded_reward: u64, annual_rate_bps: u64) {
    let mut test_f = TestFixture::new(None);
    let start_time = test_f.now() + time!(1, "m");

    let res = test_f.fund_campaign(start_time, funded_reward, annual_rate_bps);

    assert_custom_error!(res, StakingError::ZeroCampaignParameter);
    assert_eq!(test_f.token.pool_balance(), 0);
}

#[test]
fn fund_campaign_checks_limit_before_start_time() {
    let mut test_f = TestFixture::new(None);
    let start_time = test_f.now();

    let res = test_f.fund_campaign(start_time, native!(600_000, "STAKE"), 0);

    assert_custom_error!(res, StakingError::RewardAboveLimit);
}

#[test]
fn fund_campaign_transfer_failure() -> Result<()> {
    let mut test_f = TestFixture::new(None);
    let start_time = test_f.now() + time!(1, "m");
    let admin = test_f.admin;

    // Admin holds nothing
    let res = test_f.engine.fund_campaign(
        admin,
        start_time,
        DEFAULT_CAMPAIGN_REWARD,
        DEFAULT_ANNUAL_RATE_BPS,
    );

    assert_custom_error!(
        res,
        StakingError::Transfer(TransferError::InsufficientFunds {
            available: 0,
            requested: DEFAULT_CAMPAIGN_REWARD,
        })
    );
    assert!(!test_f.engine.is_funded());
    assert_eq!(test_f.engine.max_principal(), 0);
    assert_eq!(test_f.engine.apr()?, None);
    assert!(test_f.events.is_empty());

    // A failed attempt does not consume the one allowed funding
    test_f.fund_campaign(start_time, DEFAULT_CAMPAIGN_REWARD, DEFAULT_ANNUAL_RATE_BPS)?;
    assert!(test_f.engine.is_funded());

    Ok(())
}

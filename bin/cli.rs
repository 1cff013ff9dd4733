//! CLI tool for deploying and administering the collateral lender.

use collateral_lender::lender::CollateralLender;
use collateral_lender::token::ReserveToken;
use odra::casper_types::U256;
use odra::prelude::{Address, Addressable};
use odra::host::HostEnv;
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Interest rate the lender starts with: 5.00%
const DEFAULT_INTEREST_RATE: u64 = 500;

/// Deploys the lender with the default interest rate.
pub struct LenderDeployScript;

impl DeployScript for LenderDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use collateral_lender::lender::collateral_lender::CollateralLenderInitArgs;

        println!("Deploying lender with the account: {:?}", env.caller());
        let lender = CollateralLender::load_or_deploy(
            &env,
            CollateralLenderInitArgs {
                interest_rate: U256::from(DEFAULT_INTEREST_RATE),
            },
            container,
            400_000_000_000 // Gas limit for lender deployment
        )?;
        println!("Lender address: {:?}", lender.address());

        Ok(())
    }
}

/// Deploys a reserve token for test networks.
pub struct ReserveTokenDeployScript;

impl DeployScript for ReserveTokenDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use collateral_lender::token::ReserveTokenInitArgs;

        let token = ReserveToken::load_or_deploy(
            &env,
            ReserveTokenInitArgs {
                name: String::from("CA Token"),
                symbol: String::from("CAT"),
                decimals: 9,
                initial_supply: U256::from(1_000_000_000_000_000u64),
            },
            container,
            300_000_000_000
        )?;
        println!("Reserve token address: {:?}", token.address());

        Ok(())
    }
}

/// Scenario to price a reserve.
pub struct SetLoanRatioScenario;

impl Scenario for SetLoanRatioScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new(
                "reserve",
                "Address of the reserve token",
                NamedCLType::Key,
            ),
            CommandArg::new(
                "ratio",
                "Reserve units per collateral unit, scaled by 10000",
                NamedCLType::U256,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut lender = container.contract_ref::<CollateralLender>(env)?;
        let reserve = args.get_single::<Address>("reserve")?;
        let ratio = args.get_single::<U256>("ratio")?;

        env.set_gas(50_000_000_000);
        lender.try_set_loan_ratio(reserve, ratio)?;

        println!("Loan ratio set to {}", ratio);
        Ok(())
    }
}

impl ScenarioMetadata for SetLoanRatioScenario {
    const NAME: &'static str = "set-loan-ratio";
    const DESCRIPTION: &'static str = "Enables or re-prices borrowing against a reserve";
}

/// Scenario to change the interest rate for new loans.
pub struct SetInterestRateScenario;

impl Scenario for SetInterestRateScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "rate",
            "Interest rate over the loan period, scaled by 10000",
            NamedCLType::U256,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut lender = container.contract_ref::<CollateralLender>(env)?;
        let rate = args.get_single::<U256>("rate")?;

        env.set_gas(50_000_000_000);
        lender.try_set_interest_rate(rate)?;

        println!("Interest rate set to {}", rate);
        Ok(())
    }
}

impl ScenarioMetadata for SetInterestRateScenario {
    const NAME: &'static str = "set-interest-rate";
    const DESCRIPTION: &'static str = "Sets the interest rate applied to new loans";
}

/// Scenario to seize the collateral of an expired loan.
pub struct ClaimCollateralScenario;

impl Scenario for ClaimCollateralScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "borrower",
            "Address of the defaulted borrower",
            NamedCLType::Key,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut lender = container.contract_ref::<CollateralLender>(env)?;
        let borrower = args.get_single::<Address>("borrower")?;

        env.set_gas(50_000_000_000);
        lender.try_claim_collateral(borrower)?;

        println!("Collateral claimed!");
        Ok(())
    }
}

impl ScenarioMetadata for ClaimCollateralScenario {
    const NAME: &'static str = "claim-collateral";
    const DESCRIPTION: &'static str = "Seizes the collateral of an expired loan";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for the collateral lender contracts")
        // Deploy scripts
        .deploy(LenderDeployScript)
        .deploy(ReserveTokenDeployScript)
        // Contract references
        .contract::<CollateralLender>()
        .contract::<ReserveToken>()
        // Scenarios
        .scenario(SetLoanRatioScenario)
        .scenario(SetInterestRateScenario)
        .scenario(ClaimCollateralScenario)
        .build()
        .run();
}

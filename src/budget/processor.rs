use crate::budget::operations::*;
use crate::budget::processor_enums::{BudgetProcessorInput, BudgetProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<BudgetProcessorOutput> for BudgetProcessorInput {
    async fn process(&self, app_config: &AppConfig) -> anyhow::Result<BudgetProcessorOutput> {
        match self {
            BudgetProcessorInput::AddRecord(args) => {
                let res = add_record(app_config, args.clone()).await?;
                Ok(BudgetProcessorOutput::AddRecord(res))
            }
            BudgetProcessorInput::GetYearStats(args) => {
                let res = get_year_stats(app_config, args.clone()).await?;
                Ok(BudgetProcessorOutput::GetYearStats(res))
            }
        }
    }
}

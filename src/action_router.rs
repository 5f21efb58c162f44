use anyhow::Result;
use crate::author::processor_enums::{AuthorProcessorInput, AuthorProcessorOutput};
use crate::budget::processor_enums::{BudgetProcessorInput, BudgetProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

pub enum ActionRouterInput {
    Author(AuthorProcessorInput),
    Budget(BudgetProcessorInput),
}

#[derive(Debug)]
pub enum ActionRouterOutput {
    Author(AuthorProcessorOutput),
    Budget(BudgetProcessorOutput),
}

impl ActionRouterInput {
    pub async fn process(&self, app_config: AppConfig) -> Result<ActionRouterOutput> {
        match self {
            ActionRouterInput::Author(processor) => {
                let res = processor.process(&app_config).await?;
                Ok(ActionRouterOutput::Author(res))
            }
            ActionRouterInput::Budget(processor) => {
                let res = processor.process(&app_config).await?;
                Ok(ActionRouterOutput::Budget(res))
            }
        }
    }
}

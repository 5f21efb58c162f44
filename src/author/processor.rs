use crate::author::operations::*;
use crate::author::processor_enums::{AuthorProcessorInput, AuthorProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<AuthorProcessorOutput> for AuthorProcessorInput {
    async fn process(&self, app_config: &AppConfig) -> anyhow::Result<AuthorProcessorOutput> {
        match self {
            AuthorProcessorInput::CreateAuthor(args) => {
                let res = create_author(app_config, args.clone()).await?;
                Ok(AuthorProcessorOutput::CreateAuthor(res))
            }
            AuthorProcessorInput::GetAuthor(author_id) => {
                let res = get_author(app_config, *author_id).await?;
                Ok(AuthorProcessorOutput::GetAuthor(res))
            }
        }
    }
}

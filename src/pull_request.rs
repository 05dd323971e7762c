use crate::{
    cli::Args,
    command::CommandExecutor,
    context::RunContext,
    editor,
    error::Error,
    git::Readiness,
    github::{self, LabelMarkers},
    hub::{self, PullRequestOptions},
};
use anyhow::{Context, Result};

pub struct OpenRequest {
    pub assignee: String,
    pub options: PullRequestOptions,
}

impl From<Args> for OpenRequest {
    fn from(args: Args) -> Self {
        OpenRequest {
            assignee: args.assignee,
            options: PullRequestOptions {
                browse: args.browse,
                force: args.force,
                file: args.file,
                message: args.message,
                issue: args.issue,
                base: args.base,
                head: args.head,
            },
        }
    }
}

/// Opens the pull request, then labels it for review and assigns it.
/// Returns the number of the new pull request.
pub async fn open<E>(context: &RunContext<E>, request: OpenRequest) -> Result<u64>
where
    E: CommandExecutor,
{
    let OpenRequest {
        assignee,
        mut options,
    } = request;
    let config = context.config();

    log::info!("Checking the current branch");
    if let Readiness::NotReady(reason) = context.branch_readiness().await? {
        if options.force {
            log::warn!("force-opening not yet supported");
        }
        return Err(reason.into());
    }

    let slug = context.repo_slug().await?;
    let client = context.github().await?;
    let repo = client.repo(slug);

    log::info!("Looking up the review label of {}", slug);
    let markers = LabelMarkers {
        review: &config.review_marker,
        exclude: &config.self_marker,
    };
    let labels = repo.labels().await?;
    let label = github::find_assignment_label(&labels, &markers)
        .ok_or_else(|| Error::NoAssignmentLabel {
            review: config.review_marker.to_owned(),
            exclude: config.self_marker.to_owned(),
        })?
        .to_owned();

    let assignees = repo.assignees().await?;
    if github::validate_assignee(&assignee, &assignees).is_none() {
        return Err(Error::UnknownAssignee(assignee).into());
    }

    if options.message.is_none() && options.file.is_none() {
        let editor = editor::editor_from_env(&config.default_editor);
        let message = editor::compose(
            context.executor(),
            &editor,
            config.message_template.as_deref(),
        )
        .await
        .context("Cannot compose the pull request message")?;

        log::info!("Opening pull request \"{}\"", message.title());
        log::debug!("{}", message.body());
        options.message = Some(message.as_str().to_owned());
    } else {
        log::info!("Opening pull request");
    }

    let number = hub::create_pull_request(context.executor(), &config.pr_helper, &options).await?;
    log::info!("Created pull request #{}", number);

    let applied = repo.issue(number).label_and_assign(&label, &assignee).await?;
    if !applied {
        return Err(Error::LabelAndAssignFailed {
            issue: number,
            label,
            assignee,
        }
        .into());
    }

    Ok(number)
}

/// The line printed once the pull request is open, labelled and assigned.
pub fn confirmation(number: u64) -> String {
    format!("PR opened! (#{})", number)
}

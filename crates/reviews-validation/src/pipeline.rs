use std::fmt;
use std::sync::Arc;

use reviews_core::config::defaults::DEFAULT_PUBLISH_UNMODERATED;
use reviews_core::config::ReviewsConfig;
use reviews_core::errors::{ConfigError, ReviewsErrorCode};
use reviews_core::events::{EventDispatcher, ReviewPostedEvent, ReviewRejectedEvent};
use reviews_core::tracing_setup::events;
use reviews_core::{
    ReviewRecord, ReviewsError, TargetReference, UnitWeightResolver, WeightResolver,
};
use reviews_guard::{SecurityToken, TokenGuard};

use crate::content::{ContentRules, ValidatedContent};
use crate::identity;
use crate::submission::{
    AcceptedReview, RawSubmission, Rejection, SubmissionContext, SubmissionOutcome,
    SubmissionState,
};

/// The gate between a submitted form and a stored review.
///
/// Stages run in order and the first failure rejects the submission:
/// honeypot, security token, content rules, then ownership for edits.
#[derive(Clone)]
pub struct SubmissionPipeline {
    guard: TokenGuard,
    rules: ContentRules,
    weights: Arc<dyn WeightResolver>,
    dispatcher: EventDispatcher,
    publish_unmoderated: bool,
}

impl SubmissionPipeline {
    pub fn new(guard: TokenGuard, rules: ContentRules) -> Self {
        Self {
            guard,
            rules,
            weights: Arc::new(UnitWeightResolver),
            dispatcher: EventDispatcher::new(),
            publish_unmoderated: DEFAULT_PUBLISH_UNMODERATED,
        }
    }

    pub fn from_config(config: &ReviewsConfig) -> Result<Self, ConfigError> {
        let guard = TokenGuard::from_config(&config.security)?;
        let rules = ContentRules::from_config(config)?;
        Ok(Self::new(guard, rules)
            .with_publish_unmoderated(config.moderation.effective_publish_unmoderated()))
    }

    pub fn with_weight_resolver(mut self, resolver: Arc<dyn WeightResolver>) -> Self {
        self.weights = resolver;
        self
    }

    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn with_publish_unmoderated(mut self, publish: bool) -> Self {
        self.publish_unmoderated = publish;
        self
    }

    pub fn guard(&self) -> &TokenGuard {
        &self.guard
    }

    pub fn rules(&self) -> &ContentRules {
        &self.rules
    }

    /// Issue the security token for a new review form.
    pub fn issue_token(&self, target: &TargetReference, ctx: &SubmissionContext) -> SecurityToken {
        self.guard.generate(target, ctx.now.timestamp())
    }

    /// Run a submission through every stage.
    ///
    /// `existing` is the stored review named by the submission's `id`, as
    /// looked up by the host; it is ignored for new reviews.
    pub fn process(
        &self,
        raw: &RawSubmission,
        existing: Option<&ReviewRecord>,
        ctx: &SubmissionContext,
    ) -> SubmissionOutcome {
        let mut stage = SubmissionState::Received;
        let mut target = None;
        match self.run(raw, existing, ctx, &mut stage, &mut target) {
            Ok(accepted) => {
                self.announce_accepted(&accepted);
                SubmissionOutcome::Accepted(accepted)
            }
            Err(error) => {
                let rejection = Rejection { stage, error };
                self.announce_rejected(&rejection, target);
                SubmissionOutcome::Rejected(rejection)
            }
        }
    }

    fn run(
        &self,
        raw: &RawSubmission,
        existing: Option<&ReviewRecord>,
        ctx: &SubmissionContext,
        stage: &mut SubmissionState,
        target_seen: &mut Option<TargetReference>,
    ) -> Result<AcceptedReview, ReviewsError> {
        // A filled honeypot wins over every other failure.
        self.rules.check_honeypot(raw.honeypot.as_deref())?;

        let token = SecurityToken::from_form_fields(
            raw.content_type.as_deref(),
            raw.object_pk.as_deref(),
            raw.timestamp.as_deref(),
            raw.security_hash.as_deref(),
        )?;
        self.guard.verify_default(&token, ctx.now.timestamp())?;
        let target = token.target();
        *target_seen = Some(target.clone());
        *stage = SubmissionState::SecurityChecked;

        let content = self.rules.check_content(raw)?;
        *stage = SubmissionState::ContentValidated;

        let record = match raw.review_id() {
            Some(review_id) => {
                let stored =
                    identity::check_update(existing, review_id, &target, ctx.submitter.as_ref())?;
                self.updated_record(stored, content, ctx)
            }
            None => self.new_record(target, content, ctx),
        };
        Ok(AcceptedReview {
            is_update: raw.review_id().is_some(),
            record,
        })
    }

    fn new_record(
        &self,
        target: TargetReference,
        content: ValidatedContent,
        ctx: &SubmissionContext,
    ) -> ReviewRecord {
        let weight = self.weights.resolve_clamped(ctx.submitter.as_ref(), &target);
        ReviewRecord {
            id: None,
            target,
            submitter: ctx.submitter.clone(),
            rating: content.rating,
            comment: content.comment,
            weight,
            submit_date: Some(ctx.now),
            ip_address: ctx.ip_address.clone(),
            is_public: self.publish_unmoderated,
        }
    }

    fn updated_record(
        &self,
        stored: &ReviewRecord,
        content: ValidatedContent,
        ctx: &SubmissionContext,
    ) -> ReviewRecord {
        let mut record = stored.clone();
        record.rating = content.rating;
        record.comment = content.comment;
        record.submit_date = Some(ctx.now);
        record.is_public = self.publish_unmoderated;
        record.weight = self.weights.resolve_clamped(ctx.submitter.as_ref(), &record.target);
        record.ip_address = ctx.ip_address.clone();
        record
    }

    fn announce_accepted(&self, accepted: &AcceptedReview) {
        let record = &accepted.record;
        events::submission_accepted(
            &record.target.to_string(),
            record.rating,
            record.weight,
            accepted.is_update,
        );
        self.dispatcher.emit_review_posted(&ReviewPostedEvent {
            target: record.target.clone(),
            review_id: record.id.clone(),
            submitter: record.submitter.clone(),
            rating: record.rating,
            weight: record.weight,
            is_update: accepted.is_update,
            is_public: record.is_public,
        });
    }

    fn announce_rejected(&self, rejection: &Rejection, target: Option<TargetReference>) {
        let code = rejection.error.error_code();
        events::submission_rejected(rejection.stage.as_str(), code);
        self.dispatcher.emit_review_rejected(&ReviewRejectedEvent {
            target,
            stage: rejection.stage.as_str(),
            code,
            reason: rejection.error.to_string(),
        });
    }
}

impl fmt::Debug for SubmissionPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionPipeline")
            .field("guard", &self.guard)
            .field("rules", &self.rules)
            .field("dispatcher", &self.dispatcher)
            .field("publish_unmoderated", &self.publish_unmoderated)
            .finish_non_exhaustive()
    }
}

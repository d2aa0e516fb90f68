use super::{require, GameServers, Players, UserProfiles};
use crate::entities::Report;
use crate::lifecycle::FakeDataStore;
use crate::model::{CreateReportDto, EditReportDto, ReportDto, ReportsFilter, ReportsOrder};
use chrono::{DateTime, Utc};
use resource_framework::resource::contains_ignore_case;
use resource_framework::{
    ApiError, EntityMapping, Expand, InMemoryResource, InMemoryStore, Resource,
};
use uuid::Uuid;

pub struct Reports;

impl Resource for Reports {
    const NAME: &'static str = "Report";
    const PATH: &'static str = "reports";
    const EMBEDS: &'static [&'static str] = &[Players::PATH, UserProfiles::PATH, GameServers::PATH];

    type Dto = ReportDto;
    type Create = CreateReportDto;
    type Edit = EditReportDto;
    type Filter = ReportsFilter;
    type Order = ReportsOrder;

    fn edit_target(edit: &EditReportDto) -> Uuid {
        edit.report_id
    }

    fn validate_create(input: &CreateReportDto) -> Result<(), ApiError> {
        require(Self::PATH, "comments", &input.comments)
    }

    fn matches_text(_filter: &ReportsFilter, dto: &ReportDto, text: &str) -> bool {
        contains_ignore_case(&dto.comments, text)
    }
}

impl EntityMapping for Reports {
    type Entity = Report;

    fn to_dto(entity: &Report, expand: Expand) -> ReportDto {
        ReportDto {
            report_id: entity.report_id,
            player_id: entity.player_id,
            user_profile_id: entity.user_profile_id,
            game_server_id: entity.game_server_id,
            game_type: entity.game_type,
            comments: entity.comments.clone(),
            timestamp: entity.timestamp,
            closed: entity.closed,
            admin_user_profile_id: entity.admin_user_profile_id,
            admin_closing_comments: entity.admin_closing_comments.clone(),
            closed_timestamp: entity.closed_timestamp,
            player: expand.related_one(entity.player.as_ref(), Players::to_dto),
            user_profile: expand.related_one(entity.user_profile.as_ref(), UserProfiles::to_dto),
            admin_user_profile: expand
                .related_one(entity.admin_user_profile.as_ref(), UserProfiles::to_dto),
            game_server: expand.related_one(entity.game_server.as_ref(), GameServers::to_dto),
        }
    }

    fn to_entity(input: CreateReportDto) -> Report {
        Report {
            report_id: Uuid::nil(),
            player_id: input.player_id,
            user_profile_id: input.user_profile_id,
            game_server_id: input.game_server_id,
            game_type: input.game_type,
            comments: input.comments,
            timestamp: DateTime::<Utc>::default(),
            closed: false,
            admin_user_profile_id: None,
            admin_closing_comments: None,
            closed_timestamp: None,
            player: None,
            user_profile: None,
            admin_user_profile: None,
            game_server: None,
        }
    }

    /// Closing a report stamps `closed_timestamp`; reopening clears it.
    fn apply_to(edit: &EditReportDto, entity: &mut Report) {
        let was_closed = entity.closed;
        edit.closed.apply_cloned(&mut entity.closed);
        edit.admin_user_profile_id.apply_cloned(&mut entity.admin_user_profile_id);
        edit.admin_closing_comments.apply_cloned(&mut entity.admin_closing_comments);

        match (was_closed, entity.closed) {
            (false, true) => entity.closed_timestamp = Some(Utc::now()),
            (true, false) => entity.closed_timestamp = None,
            _ => {}
        }
    }
}

impl InMemoryResource for Reports {
    type Context = FakeDataStore;

    fn store(ctx: &FakeDataStore) -> &InMemoryStore<Report> {
        &ctx.reports
    }

    fn entity_id(entity: &Report) -> Uuid {
        entity.report_id
    }

    fn assign_identity(entity: &mut Report, id: Uuid, now: DateTime<Utc>) {
        entity.report_id = id;
        entity.timestamp = now;
    }

    fn load_related(entity: &mut Report, ctx: &FakeDataStore) {
        entity.player = ctx.players.get(&entity.player_id);
        entity.user_profile = entity
            .user_profile_id
            .and_then(|id| ctx.user_profiles.get(&id));
        entity.admin_user_profile = entity
            .admin_user_profile_id
            .and_then(|id| ctx.user_profiles.get(&id));
        entity.game_server = ctx.game_servers.get(&entity.game_server_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GameType;

    #[test]
    fn closing_stamps_and_reopening_clears() {
        let mut report = Reports::to_entity(CreateReportDto {
            player_id: Uuid::new_v4(),
            user_profile_id: None,
            game_server_id: Uuid::new_v4(),
            game_type: GameType::CallOfDuty4,
            comments: "aimbot".into(),
        });

        Reports::apply_to(&EditReportDto::close(Uuid::nil(), Uuid::new_v4(), "banned"), &mut report);
        assert!(report.closed);
        assert!(report.closed_timestamp.is_some());
        assert_eq!(report.admin_closing_comments.as_deref(), Some("banned"));

        let reopen = EditReportDto {
            closed: resource_framework::Patch::Set(false),
            ..Default::default()
        };
        Reports::apply_to(&reopen, &mut report);
        assert!(!report.closed);
        assert_eq!(report.closed_timestamp, None);
        assert_eq!(report.admin_closing_comments.as_deref(), Some("banned"));
    }
}

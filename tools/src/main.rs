//! roster-cli: headless scheduling desk for MediaRoster.
//!
//! Usage:
//!   roster-cli seed --db roster.db --date 2024-06-12
//!   roster-cli week --date 2024-06-15
//!   roster-cli list --team "Photo Team" --day saturday
//!   roster-cli roster --id <schedule-id>
//!   roster-cli members --team "Video Team"
//!   roster-cli --ipc-mode

use anyhow::Result;
use mediaroster_core::{
    auth::{Caller, MemberRole, NewMember},
    desk::ScheduleDesk,
    drafts::DraftBoard,
    model::{self, ScheduleChanges, ScheduleDraft, ScheduleRecord},
    projection::{self, ScheduleFilter},
    slot::ScheduleSlot,
    week,
};
use std::collections::HashMap;
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    SetFilter {
        #[serde(default)]
        filter: ScheduleFilter,
    },
    StageRole {
        slot: ScheduleSlot,
        role: String,
        name: String,
    },
    DiscardDraft {
        slot: ScheduleSlot,
    },
    SaveDraft {
        slot: ScheduleSlot,
        caller: Caller,
        #[serde(default)]
        notes: String,
    },
    DeleteSchedule {
        schedule_id: String,
        caller: Caller,
    },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    schedules: Vec<ScheduleRecord>,
    dates: Vec<chrono::NaiveDate>,
    services: Vec<String>,
    teams: Vec<String>,
    drafts_open: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let db = arg_value(&args, "--db").unwrap_or(":memory:");
    let data_dir = arg_value(&args, "--data-dir").unwrap_or("./data");
    let command = args.get(1).filter(|a| !a.starts_with("--")).cloned();

    if !ipc_mode {
        println!("MediaRoster roster-cli");
        println!("  db:        {db}");
        println!("  data_dir:  {data_dir}");
        println!();
    }

    let desk = ScheduleDesk::build(db, data_dir)?;

    if ipc_mode {
        return run_ipc_loop(&desk);
    }

    match command.as_deref() {
        Some("seed") => seed(&desk, &args),
        Some("week") => week_overview(&desk, &args),
        Some("list") => list(&desk, &args),
        Some("roster") => roster(&desk, &args),
        Some("members") => members(&desk, &args),
        Some(other) => anyhow::bail!("unknown command '{other}'"),
        None => anyhow::bail!("missing command (seed, week, list, roster, members) or --ipc-mode"),
    }
}

fn run_ipc_loop(desk: &ScheduleDesk) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();
    let mut board = DraftBoard::new();
    let mut filter = ScheduleFilter::default();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        if matches!(cmd, IpcCommand::Quit) {
            break;
        }

        match apply_command(desk, &mut board, &mut filter, cmd) {
            Ok(()) => {
                let state = build_ui_state(desk, &filter, &board)?;
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            Err(e) => {
                log::warn!("command failed: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn apply_command(
    desk: &ScheduleDesk,
    board: &mut DraftBoard,
    filter: &mut ScheduleFilter,
    cmd: IpcCommand,
) -> Result<()> {
    match cmd {
        IpcCommand::Quit | IpcCommand::GetState => {}
        IpcCommand::SetFilter { filter: new_filter } => {
            *filter = new_filter;
        }
        IpcCommand::StageRole { slot, role, name } => {
            let key = slot.key();
            if let Some(existing) = desk.existing_for_slot(&slot)? {
                board.load_existing(&key, &existing.assignments);
            }
            board.stage(&key, &role, &name);
        }
        IpcCommand::DiscardDraft { slot } => {
            board.discard(&slot.key());
        }
        IpcCommand::SaveDraft {
            slot,
            caller,
            notes,
        } => {
            let key = slot.key();
            let assignments = board.staged(&key).cloned().unwrap_or_default();
            match desk.existing_for_slot(&slot)? {
                Some(existing) => {
                    desk.update_schedule(
                        &caller,
                        &existing.schedule_id,
                        ScheduleChanges {
                            assignments: Some(assignments),
                            notes: if notes.is_empty() { None } else { Some(notes) },
                            ..ScheduleChanges::default()
                        },
                    )?;
                }
                None => {
                    desk.create_schedule(
                        &caller,
                        ScheduleDraft {
                            date: slot.date,
                            day: slot.day,
                            service: slot.service,
                            time: slot.time,
                            team: slot.team,
                            assignments,
                            notes,
                        },
                    )?;
                }
            }
            board.discard(&key);
        }
        IpcCommand::DeleteSchedule {
            schedule_id,
            caller,
        } => {
            desk.delete_schedule(&caller, &schedule_id)?;
        }
    }
    Ok(())
}

fn build_ui_state(
    desk: &ScheduleDesk,
    filter: &ScheduleFilter,
    board: &DraftBoard,
) -> Result<UiState> {
    let all = desk.all_schedules()?;
    let schedules = projection::project(&all, filter);
    Ok(UiState {
        dates: projection::distinct_dates(&all),
        services: projection::distinct_services(&all),
        teams: projection::distinct_teams(&all),
        drafts_open: board.len(),
        schedules,
    })
}

/// Register a leader and a member per team, then roster every team onto
/// every configured sitting of the reference week.
fn seed(desk: &ScheduleDesk, args: &[String]) -> Result<()> {
    let reference = reference_date(args, "2024-06-12")?;

    let mut leaders: Vec<(String, Caller)> = Vec::new();
    for team in desk.config.team_names() {
        let slug = team
            .split_whitespace()
            .next()
            .unwrap_or("team")
            .to_lowercase();
        let leader = desk.register_member(NewMember {
            username: format!("{slug}.leader"),
            email: format!("{slug}.leader@example.org"),
            name: format!("{team} Leader"),
            role: MemberRole::TeamLeader,
            team: team.to_string(),
        })?;
        desk.register_member(NewMember {
            username: format!("{slug}.member"),
            email: format!("{slug}.member@example.org"),
            name: format!("{team} Member"),
            role: MemberRole::TeamMember,
            team: team.to_string(),
        })?;
        leaders.push((team.to_string(), Caller::from_member(&leader)));
    }

    for (day, date) in week::week_dates(reference, &desk.config.week) {
        if let Some(services) = desk.config.services_for(&day) {
            for service in services {
                for time in &service.times {
                    for (team, caller) in &leaders {
                        let mut assignments = HashMap::new();
                        if let Some(roles) = desk.config.roles_for(team) {
                            if let Some(first) = roles.first() {
                                assignments.insert(first.clone(), format!("{team} Member"));
                            }
                        }
                        desk.create_schedule(
                            caller,
                            ScheduleDraft {
                                date,
                                day: day.clone(),
                                service: service.name.clone(),
                                time: time.clone(),
                                team: team.clone(),
                                assignments,
                                notes: format!("Created by {}", caller.name),
                            },
                        )?;
                    }
                }
            }
        }
    }

    println!("=== SEED SUMMARY ===");
    println!("  reference:  {reference}");
    println!("  members:    {}", desk.store.member_count()?);
    println!("  schedules:  {}", desk.store.schedule_count()?);
    Ok(())
}

fn week_overview(desk: &ScheduleDesk, args: &[String]) -> Result<()> {
    let raw =
        arg_value(args, "--date").ok_or_else(|| anyhow::anyhow!("week needs an explicit --date"))?;
    let reference = week::parse_civil_date(raw)?;
    let start = week::resolve_week_start(reference, &desk.config.week);

    println!("=== WEEK OF {start} ===");
    for (day, date) in week::week_dates(reference, &desk.config.week) {
        println!("{} {date}", model::day_label(&day));
        if let Some(services) = desk.config.services_for(&day) {
            for service in services {
                for time in &service.times {
                    println!("  {} [{}]", service.name, time);
                    for team in desk.config.team_names() {
                        let slot = ScheduleSlot {
                            date,
                            day: day.clone(),
                            service: service.name.clone(),
                            time: time.clone(),
                            team: team.to_string(),
                        };
                        let mark = if desk.existing_for_slot(&slot)?.is_some() {
                            "rostered"
                        } else {
                            "open"
                        };
                        println!("    {team:<15} {mark}");
                    }
                }
            }
        }
        println!();
    }
    Ok(())
}

fn list(desk: &ScheduleDesk, args: &[String]) -> Result<()> {
    let mut filter = ScheduleFilter::default();
    if let Some(date) = arg_value(args, "--date") {
        filter.date = Some(week::parse_civil_date(date)?);
    }
    if let Some(day) = arg_value(args, "--day") {
        filter.day = Some(day.to_string());
    }
    if let Some(service) = arg_value(args, "--service") {
        filter.service = Some(service.to_string());
    }
    if let Some(team) = arg_value(args, "--team") {
        filter.team = Some(team.to_string());
    }

    let result = desk.filtered_schedules(&filter)?;
    println!("=== SCHEDULES ({}) ===", result.len());
    for record in &result {
        println!(
            "  {}  {:<9} {:<6} {:<18} {:<14} {}",
            record.date, record.day, record.time, record.service, record.team, record.schedule_id
        );
    }
    Ok(())
}

fn roster(desk: &ScheduleDesk, args: &[String]) -> Result<()> {
    let id = arg_value(args, "--id").ok_or_else(|| anyhow::anyhow!("roster needs --id"))?;
    let record = desk.schedule(id)?;

    println!("=== {} ===", record.formatted_date());
    println!("  {} [{}], {}", record.service, record.time, record.team);
    for assignment in desk.roster_for(&record) {
        println!("  {:<20} {}", assignment.role, assignment.display_name());
    }
    if !record.notes.is_empty() {
        println!("  notes: {}", record.notes);
    }
    Ok(())
}

fn members(desk: &ScheduleDesk, args: &[String]) -> Result<()> {
    let team = arg_value(args, "--team").ok_or_else(|| anyhow::anyhow!("members needs --team"))?;
    let listing = desk.team_members(team)?;
    println!("=== {team} MEMBERS ({}) ===", listing.len());
    for member in &listing {
        println!("  {:<12} {}", member.username, member.name);
    }
    Ok(())
}

fn reference_date(args: &[String], default: &str) -> Result<chrono::NaiveDate> {
    let raw = arg_value(args, "--date").unwrap_or(default);
    Ok(week::parse_civil_date(raw)?)
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

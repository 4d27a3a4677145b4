use super::logging::init_logging;
use super::render::{
    print_messages, render_config, render_flat_list, render_full_games, render_game_list,
    render_image_candidates, render_paths, render_platforms, render_stats,
};
use super::setup::{
    print_grouped_help, print_help_for_command, Cli, Commands, CoreCommands, DataCommands,
    GameCommands, MiscCommands,
};
use clap::{CommandFactory, FromArgMatches};
use gameshelf::api::ShelfApi;
use gameshelf::commands::config::ConfigAction;
use gameshelf::commands::{CmdMessage, GameChanges};
use gameshelf::error::Result;
use gameshelf::image_search::HttpImageSearch;
use gameshelf::init::initialize;
use gameshelf::model::GameFields;
use gameshelf::store::fs_backend::FsBackend;
use std::path::PathBuf;

struct AppContext {
    api: ShelfApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    init_logging(cli.verbose);

    if cli.help {
        match matches.subcommand_name() {
            Some(name) => print_help_for_command(name),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        handle_help(command.as_deref());
        return Ok(());
    }

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add {
                platform,
                notes,
                image_url,
                manual,
                boxed,
                title,
            } => {
                let fields = GameFields {
                    title: title.join(" "),
                    platform,
                    notes,
                    image_url,
                    has_manual: manual,
                    has_box: boxed,
                };
                handle_add(&mut ctx, fields)
            }
            CoreCommands::List { platform } => handle_list(&ctx, platform),
            CoreCommands::Search { term } => handle_search(&ctx, term.join(" ")),
            CoreCommands::Stats => handle_stats(&ctx),
        },
        Some(Commands::Game(cmd)) => match cmd {
            GameCommands::View { games } => handle_view(&ctx, games),
            GameCommands::Edit {
                title,
                platform,
                notes,
                image_url,
                manual,
                boxed,
                game,
            } => {
                let changes = GameChanges {
                    title,
                    platform,
                    notes,
                    image_url,
                    has_manual: manual,
                    has_box: boxed,
                };
                handle_edit(&mut ctx, game, changes)
            }
            GameCommands::Delete { games } => handle_delete(&mut ctx, games),
            GameCommands::Image { pick, game } => handle_image(&mut ctx, game, pick),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Import { path } => handle_import(&mut ctx, path),
            DataCommands::Export { path } => handle_export(&ctx, path),
            DataCommands::Seed { force } => handle_seed(&mut ctx, force),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Platforms => handle_platforms(&ctx),
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::Init => handle_init(&ctx),
            MiscCommands::Paths => handle_paths(&ctx),
            MiscCommands::Help { command } => {
                handle_help(command.as_deref());
                Ok(())
            }
        },
        None => handle_list(&ctx, None),
    }
}

fn init_context() -> Result<AppContext> {
    let ctx = initialize()?;
    Ok(AppContext { api: ctx.api })
}

fn handle_add(ctx: &mut AppContext, fields: GameFields) -> Result<()> {
    let result = ctx.api.add_game(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, platform: Option<String>) -> Result<()> {
    let result = ctx.api.list_games(platform.as_deref())?;
    print!(
        "{}",
        render_game_list(&result.listed_games, &result.platform_groups)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_games(&term)?;
    print!("{}", render_flat_list(&result.listed_games));
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, games: Vec<String>) -> Result<()> {
    let result = ctx.api.view_games(&games)?;
    print!("{}", render_full_games(&result.listed_games));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, game: Vec<String>, changes: GameChanges) -> Result<()> {
    let result = ctx.api.edit_game(&game, changes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, games: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_games(&games)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_image(ctx: &mut AppContext, game: Vec<String>, pick: Option<usize>) -> Result<()> {
    let searcher = match HttpImageSearch::from_config(ctx.api.config()) {
        Ok(searcher) => searcher,
        Err(e) => {
            print_messages(&[CmdMessage::warning(e.to_string())]);
            return Ok(());
        }
    };
    let result = ctx.api.find_images(&searcher, &game, pick)?;
    if pick.is_none() {
        print!("{}", render_image_candidates(&result.image_candidates));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: String) -> Result<()> {
    let result = ctx.api.import_games(&PathBuf::from(path))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<String>) -> Result<()> {
    let path = path.map(PathBuf::from);
    let result = ctx.api.export_games(path.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_seed(ctx: &mut AppContext, force: bool) -> Result<()> {
    let result = ctx.api.seed(force)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_platforms(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.platforms()?;
    print!("{}", render_platforms(&result.platform_groups));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = ConfigAction::from_args(key, value);
    let show_all = action == ConfigAction::Show;

    let result = ctx.api.config_cmd(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_paths(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.show_paths()?;
    print!("{}", render_paths(&result.paths));
    Ok(())
}

fn handle_help(command: Option<&str>) {
    match command {
        Some(name) => print_help_for_command(name),
        None => print_grouped_help(),
    }
}

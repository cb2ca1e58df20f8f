use hangman::cli::{
    CliInterface, choose_category, display_exit_message, display_stats, parse_cli,
    read_player_name,
};
use hangman::config::{LOG_FILE_NAME, STATS_FILE_NAME};
use hangman::logging::init_logging;
use hangman::tui::TuiInterface;
use hangman::wordbank::load_wordbank_or_default;
use hangman::{Game, PlayerStatsStore, StatsScope, game_loop};
use std::io;

fn main() {
    let cli = parse_cli();
    let data_dir = cli.data_dir();
    init_logging(&data_dir.join(LOG_FILE_NAME), !cli.tui);

    if cli.stats {
        let store = PlayerStatsStore::load(data_dir.join(STATS_FILE_NAME));
        display_stats(&store.leaderboard(), &StatsScope::AllPlayers);
        return;
    }

    let word_bank = load_wordbank_or_default(cli.words_path.as_deref());
    let categories: Vec<&str> = word_bank.category_names().collect();
    if cli.list_categories {
        for category in &categories {
            println!("{category}");
        }
        return;
    }

    let mut input = io::stdin().lock();
    let Some(player_name) = cli
        .player_name
        .clone()
        .or_else(|| read_player_name(&mut input))
    else {
        println!("Exiting.");
        return;
    };
    let category = cli
        .category
        .clone()
        .or_else(|| choose_category(&mut input, &categories));
    let config = cli.to_config(player_name, category);
    log::info!(
        "Starting session for '{}' in category {:?}",
        config.player_name,
        config.category
    );

    let mut game = Game::with_word_bank(&config, word_bank);

    if cli.tui {
        match TuiInterface::new() {
            Ok(mut tui) => {
                game_loop(&mut game, &mut tui);
                drop(tui);
                display_exit_message(&game.view());
                return;
            }
            Err(e) => {
                log::warn!("Failed to start the terminal interface: {e}");
                eprintln!("Could not start the full-screen interface ({e}), using the command line.");
            }
        }
    }

    let mut interface = CliInterface::new(input);
    game_loop(&mut game, &mut interface);
}

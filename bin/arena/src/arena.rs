use crate::*;
use gambit_core::Depth;
use gambit_core::Utility;
use gambit_jedi::*;
use gambit_search::*;

/// One computer-vs-computer match at a fixed depth limit.
///
/// Each side searches with its own engine over its own copy of the rules;
/// the Rebel forces ask for Max's decision, the Sith for Min's.
pub struct Arena {
    game: JediGame,
    quiet: bool,
    json: bool,
}

impl Arena {
    pub fn new(size: usize, depth: Depth) -> anyhow::Result<Self> {
        Ok(Self {
            game: JediGame::new(size, depth)?,
            quiet: false,
            json: false,
        })
    }
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Alternate decisions until the game ends.
    pub fn play(&self) -> anyhow::Result<Outcome> {
        let ref rules = self.game;
        let rebels_rules = self.game;
        let sith_rules = self.game;
        let rebels = SearchEngine::new(&rebels_rules);
        let sith = SearchEngine::new(&sith_rules);
        let mut outcome = Outcome::from(rules);
        let mut state = rules.root();
        log::info!("match at depth {} on {}x{}", rules.depth(), rules.size(), rules.size());
        while !rules.is_terminal(&state) {
            if !self.quiet {
                println!("{}", state);
            }
            let result = match Player::of(rules, &state) {
                Some(Player::Max) => rebels.decide_for_max(&state),
                Some(Player::Min) => sith.decide_for_min(&state),
                None => anyhow::bail!("no side to move at ply {}", state.plies()),
            };
            outcome.record(state.turn(), &result);
            match self.json {
                true => println!("{}", serde_json::to_string(&result)?),
                false => println!("{}", result),
            }
            let ref edge = result
                .into_edge()
                .ok_or_else(|| anyhow::anyhow!("no legal move at ply {}", state.plies()))?;
            state = rules.result(&state, edge);
        }
        if !self.quiet {
            println!("{}", state);
        }
        outcome.settle(rules, &state);
        println!("{}", outcome.congratulate());
        log::info!("{}", outcome.congratulate());
        Ok(outcome)
    }
}

/// How a match ended, and what it cost each side.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    depth: Depth,
    winner: Option<Faction>,
    utility: Utility,
    plies: usize,
    rebels: Tally,
    sith: Tally,
}

impl From<&JediGame> for Outcome {
    fn from(game: &JediGame) -> Self {
        Self {
            depth: game.depth(),
            winner: None,
            utility: 0.,
            plies: 0,
            rebels: Tally::default(),
            sith: Tally::default(),
        }
    }
}

impl Outcome {
    fn record(&mut self, player: Player, decision: &impl Telemetry) {
        match Faction::from(player) {
            Faction::Rebels => self.rebels.record(decision),
            Faction::Sith => self.sith.record(decision),
        }
    }

    fn settle(&mut self, game: &JediGame, state: &JediState) {
        self.winner = game.winner(state);
        self.utility = game.utility(state);
        self.plies = state.plies();
    }

    pub fn winner(&self) -> Option<Faction> {
        self.winner
    }

    pub fn congratulate(&self) -> String {
        match self.winner {
            Some(faction) => format!("Congratulations, {} wins (utility: {})", faction, self.utility),
            None => format!("No winner (utility: {})", self.utility),
        }
    }

    fn verdict(&self) -> String {
        match self.winner {
            Some(Faction::Rebels) => "Rebels".to_string(),
            Some(Faction::Sith) => "Sith".to_string(),
            None => "draw".to_string(),
        }
    }

    #[rustfmt::skip]
    pub fn table(outcomes: &[Self]) -> String {
        let mut lines = Vec::new();
        lines.push("┌───────┬─────────┬───────┬────────────┬────────────┐".to_string());
        lines.push("│ Depth │ Outcome │ Plies │      Nodes │    Seconds │".to_string());
        lines.push("├───────┼─────────┼───────┼────────────┼────────────┤".to_string());
        for outcome in outcomes {
            let ref total = outcome.rebels + outcome.sith;
            lines.push(format!(
                "│ {:>5} │ {:>7} │ {:>5} │ {:>10} │ {:>10.4} │",
                outcome.depth,
                outcome.verdict(),
                outcome.plies,
                total.nodes(),
                total.elapsed().as_secs_f64(),
            ));
        }
        lines.push("└───────┴─────────┴───────┴────────────┴────────────┘".to_string());
        for outcome in outcomes {
            lines.push(format!("depth {} Rebels {}", outcome.depth, outcome.rebels.format()));
            lines.push(format!("depth {} Sith   {}", outcome.depth, outcome.sith.format()));
        }
        lines.join("\n")
    }
}

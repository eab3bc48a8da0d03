//! The butcher and mobtypes command surface.
//!
//! Verb and argument shape follow the original plugin contract: verbs are
//! matched case-insensitively, arguments are limited to letters and spaces
//! (the `^[a-z ]*$` rule) and capped at five.

use std::collections::HashSet;

use tracing::info;

use mobmanager_cull::{cull, externally_owned, resolve_selector, Filter, SelectorError};
use mobmanager_cull::{ManagedWorld, PopulationCounter};
use mobmanager_taxonomy::{KindId, Taxonomy};

use crate::config::PluginConfig;

/// Host-side permission lookup for the invoking sender.
pub trait Permissions {
    fn has(&self, node: &str) -> bool;
}

/// Where user-visible command output goes.
pub trait ChatSink {
    fn send(&mut self, message: &str);
}

/// A dispatched command invocation: the matched verb plus its extra
/// arguments. Console senders bypass permission checks.
pub struct CommandContext {
    pub verb: String,
    pub args: Vec<String>,
    pub is_player: bool,
}

/// Static help metadata for a command, as shown by the host's help verb.
pub struct CommandInfo {
    pub aliases: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub const BUTCHER_INFO: CommandInfo = CommandInfo {
    aliases: "butcher,butcherall",
    usage: "/mm butcher [MobTypes]",
    description: "Despawns entities from each world managed by MobManager. \
        [MobTypes] can be monster, animal, wateranimal, ambient, villager \
        or any entity type returned by /mm mobtypes.",
};

pub const MOB_TYPES_INFO: CommandInfo = CommandInfo {
    aliases: "mobtypes,submobtypes",
    usage: "/mm mobtypes",
    description: "Lists all valid entity types for use in the config and /mm spawn.",
};

pub fn is_butcher_verb(verb: &str) -> bool {
    verb.eq_ignore_ascii_case("butcher") || verb.eq_ignore_ascii_case("butcherall")
}

pub fn is_mobtypes_verb(verb: &str) -> bool {
    verb.eq_ignore_ascii_case("mobtypes") || verb.eq_ignore_ascii_case("submobtypes")
}

const MAX_BUTCHER_ARGS: usize = 5;

/// The loaded plugin core: the taxonomy plus the limiter state the command
/// handlers consult.
pub struct MobManager {
    taxonomy: Taxonomy,
    limiter_enabled: bool,
    ignored_mobs: HashSet<KindId>,
}

impl MobManager {
    pub fn new(taxonomy: Taxonomy, config: &PluginConfig) -> Self {
        let ignored_mobs = config.resolve_ignored_mobs(&taxonomy);
        info!(
            enabled = config.limiter.enabled,
            ignored = ignored_mobs.len(),
            "limiter configured"
        );
        Self {
            taxonomy,
            limiter_enabled: config.limiter.enabled,
            ignored_mobs,
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// `/mm butcher [MobTypes]` and `/mm butcherall [MobTypes]`.
    ///
    /// Returns the removal count, or `None` when the command aborted before
    /// the cull ran (permission, disabled limiter, bad arguments).
    pub fn handle_butcher(
        &self,
        ctx: &CommandContext,
        perms: &dyn Permissions,
        chat: &mut dyn ChatSink,
        worlds: &mut [&mut dyn ManagedWorld],
        counters: &mut dyn PopulationCounter,
    ) -> Option<u32> {
        if ctx.is_player && !perms.has("mobmanager.butcher") {
            chat.send("§4You do not have permission to use /mm butcher");
            return None;
        }

        if !self.limiter_enabled {
            chat.send("§cThis command requires EnableLimiter in main config to be true");
            return None;
        }

        if !valid_args(&ctx.args) {
            chat.send(&format!("§cUsage: §e{}", BUTCHER_INFO.usage));
            return None;
        }

        let bulk = ctx.verb.eq_ignore_ascii_case("butcherall");

        let filter = if ctx.args.is_empty() {
            Filter::default_set(bulk)
        } else {
            let mut selectors = Vec::with_capacity(ctx.args.len());
            for arg in &ctx.args {
                match resolve_selector(&self.taxonomy, arg) {
                    Ok(selector) => selectors.push(selector),
                    Err(SelectorError::InvalidSelector(token)) => {
                        chat.send(&format!("§cInvalid mob type '§e{token}§c'"));
                        return None;
                    }
                }
            }
            Filter::new(selectors, bulk)
        };

        let removed = cull(
            &self.taxonomy,
            &filter,
            worlds,
            counters,
            &self.ignored_mobs,
            &externally_owned,
        );

        chat.send(&format!("§7~Removed {removed} mobs"));
        Some(removed)
    }

    /// `/mm mobtypes` and `/mm submobtypes`.
    pub fn handle_mobtypes(
        &self,
        ctx: &CommandContext,
        perms: &dyn Permissions,
        chat: &mut dyn ChatSink,
    ) {
        if ctx.is_player
            && !perms.has("mobmanager.mobtypes")
            && !perms.has("mobmanager.spawn")
            && !perms.has("mobmanager.pspawn")
        {
            chat.send("§4You do not have permission to use /mm mobtypes");
            return;
        }

        let subtypes = ctx.verb.eq_ignore_ascii_case("submobtypes");

        chat.send("§6------------.:§2MobManager Valid Entity Types§6:.------------");
        for line in self.taxonomy.render_list(subtypes).lines() {
            chat.send(&format!("§b{line}"));
        }
    }
}

// ^[a-z ]*$ (case-insensitive), at most five arguments.
fn valid_args(args: &[String]) -> bool {
    args.len() <= MAX_BUTCHER_ARGS
        && args
            .iter()
            .all(|arg| arg.chars().all(|c| c.is_ascii_alphabetic() || c == ' '))
}

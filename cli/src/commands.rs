//! Subcommands and their execution against a [`HintClient`].

use anyhow::Result;
use clap::Subcommand;
use pool_hints::{BondRequest, HintClient};
use pool_types::{SnapshotSource, Stake, TranscoderAddress};
use serde_json::Value;

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Current neighbours of a transcoder.
    Position {
        #[arg(long)]
        address: TranscoderAddress,
    },

    /// Hints for moving stake from one transcoder to another.
    ///
    /// With only one of --old/--new, that transcoder gains the stake.
    Move {
        #[arg(long)]
        old: Option<TranscoderAddress>,
        #[arg(long)]
        new: Option<TranscoderAddress>,
        #[arg(long)]
        delta: Stake,
    },

    /// Hints for bonding stake to a transcoder.
    Bond {
        /// Transcoder the delegator is currently bonded to.
        #[arg(long)]
        from: Option<TranscoderAddress>,
        /// Stake the delegator already has bonded.
        #[arg(long, default_value = "0")]
        bonded: Stake,
        #[arg(long)]
        to: TranscoderAddress,
        #[arg(long)]
        amount: Stake,
    },

    /// Hint for a transcoder after stake is unbonded from it.
    Unbond {
        #[arg(long)]
        delegate: TranscoderAddress,
        #[arg(long)]
        amount: Stake,
    },

    /// Hint for a transcoder after unbonding stake is rebonded to it.
    Rebond {
        #[arg(long)]
        delegate: TranscoderAddress,
        #[arg(long)]
        amount: Stake,
    },

    /// Hint for a transcoder after it claims a reward.
    Reward {
        #[arg(long)]
        transcoder: TranscoderAddress,
        #[arg(long)]
        amount: Stake,
    },
}

/// Run `command` and return its result as a JSON document.
pub fn execute<S: SnapshotSource>(client: &HintClient<S>, command: &Command) -> Result<Value> {
    let output = match command {
        Command::Position { address } => serde_json::to_value(client.position_hints(address)?)?,
        Command::Move { old, new, delta } => {
            serde_json::to_value(client.move_hints(old.as_ref(), new.as_ref(), *delta)?)?
        }
        Command::Bond {
            from,
            bonded,
            to,
            amount,
        } => {
            let request = BondRequest {
                delegate: *from,
                bonded: *bonded,
                to: *to,
                amount: *amount,
            };
            serde_json::to_value(client.bond_hints(&request)?)?
        }
        Command::Unbond { delegate, amount } => {
            serde_json::to_value(client.unbond_hints(delegate, *amount)?)?
        }
        Command::Rebond { delegate, amount } => {
            serde_json::to_value(client.rebond_hints(delegate, *amount)?)?
        }
        Command::Reward { transcoder, amount } => {
            serde_json::to_value(client.reward_hints(transcoder, *amount)?)?
        }
    };
    Ok(output)
}

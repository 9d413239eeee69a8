//! Line-oriented driver for the `run` and `demo` subcommands.

use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use uuid::Uuid;

use shopcart::cart::{CartItem, CartItemError};
use shopcart::viewmodel::{CartIntent, CartState, CartViewModel, StateSubscription};

pub const USAGE: &str =
    "commands: load | add <name> <price> <qty> | remove <id> | qty <id> <n> | show | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Dispatch(CartIntent),
    Show,
    Quit,
}

#[derive(Debug, PartialEq, Error)]
pub enum LineError {
    #[error("Unknown command '{0}' ({usage})", usage = USAGE)]
    UnknownCommand(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{value}' is not a valid {what}")]
    InvalidNumber { value: String, what: &'static str },

    #[error(transparent)]
    InvalidItem(#[from] CartItemError),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>, LineError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = words.split_first() else {
        return Ok(None);
    };

    let parsed = match command {
        "load" => ReplCommand::Dispatch(CartIntent::LoadCart),
        "show" => ReplCommand::Show,
        "quit" | "exit" => ReplCommand::Quit,
        "add" => {
            // Name may contain spaces; price and quantity are the last two words.
            let [name @ .., price, quantity] = args else {
                return Err(LineError::MissingArgument {
                    command: "add",
                    expected: "<name> <price> <qty>",
                });
            };
            if name.is_empty() {
                return Err(LineError::MissingArgument {
                    command: "add",
                    expected: "<name> <price> <qty>",
                });
            }
            let price = Decimal::from_str(price).map_err(|_| LineError::InvalidNumber {
                value: price.to_string(),
                what: "price",
            })?;
            let item = CartItem::new(
                Uuid::new_v4().to_string(),
                name.join(" "),
                price,
                parse_quantity(quantity)?,
            )?;
            ReplCommand::Dispatch(CartIntent::AddItem(item))
        }
        "remove" => {
            let [id] = args else {
                return Err(LineError::MissingArgument {
                    command: "remove",
                    expected: "<id>",
                });
            };
            ReplCommand::Dispatch(CartIntent::RemoveItem { id: id.to_string() })
        }
        "qty" => {
            let [id, quantity] = args else {
                return Err(LineError::MissingArgument {
                    command: "qty",
                    expected: "<id> <n>",
                });
            };
            ReplCommand::Dispatch(CartIntent::UpdateQuantity {
                id: id.to_string(),
                quantity: parse_quantity(quantity)?,
            })
        }
        other => return Err(LineError::UnknownCommand(other.to_string())),
    };
    Ok(Some(parsed))
}

fn parse_quantity(value: &str) -> Result<u32, LineError> {
    value.parse().map_err(|_| LineError::InvalidNumber {
        value: value.to_string(),
        what: "quantity",
    })
}

/// Load the cart once and print snapshots to `out` until it settles.
pub async fn run_demo<W: Write>(view_model: CartViewModel, out: &mut W) -> anyhow::Result<()> {
    let mut states = view_model.observe_state();
    view_model.dispatch(CartIntent::LoadCart);
    while let Some(state) = states.next().await {
        print_state(out, &state)?;
        if !state.is_loading() {
            break;
        }
    }
    Ok(())
}

/// Dispatch commands read from `input`, printing every published snapshot.
pub async fn run_repl<R, W>(
    view_model: CartViewModel,
    input: R,
    out: Arc<Mutex<W>>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let printer = tokio::spawn(print_states(view_model.observe_state(), Arc::clone(&out)));
    eprintln!("{USAGE}");

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ReplCommand::Dispatch(intent))) => view_model.dispatch(intent),
            Ok(Some(ReplCommand::Show)) => match view_model.current() {
                Some(state) => print_state(&mut *out.lock(), &state)?,
                None => eprintln!("Cart not loaded yet, try 'load'"),
            },
            Ok(Some(ReplCommand::Quit)) => break,
            Err(err) => eprintln!("{err}"),
        }
    }

    // Closing the last handle lets the worker drain its queue and stop,
    // which ends the printer's subscription.
    drop(view_model);
    printer.await??;
    Ok(())
}

async fn print_states<W: Write>(
    mut states: StateSubscription,
    out: Arc<Mutex<W>>,
) -> anyhow::Result<()> {
    while let Some(state) = states.next().await {
        print_state(&mut *out.lock(), &state)?;
    }
    Ok(())
}

fn print_state<W: Write + ?Sized>(out: &mut W, state: &CartState) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string(state)?)?;
    out.flush()?;
    Ok(())
}

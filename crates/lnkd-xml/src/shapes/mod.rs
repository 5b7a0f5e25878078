//! Constructors for the update shape variants.
//!
//! Each constructor receives the `update-content` node after the required
//! paths for its type have been checked, so [`required::node`] lookups only
//! fail if the table and a constructor disagree. Everything else is read
//! through the tolerant accessor.

mod activity;
mod job;
mod network;
mod qa;
mod recommend;
mod share;

use lnkd_core::{Payload, UpdateType};

pub use self::share::share_from;
use crate::{Options, error::Result, tree::Element};

/// Build the payload for a registered type. Profile records carried inside a
/// payload (PROF positions) are built with the caller's `options`.
pub fn construct(
  ty: UpdateType,
  content: &Element,
  options: &Options,
) -> Result<Payload> {
  Ok(match ty {
    UpdateType::Conn => Payload::Conn(network::conn(content)?),
    UpdateType::Ncon => Payload::Ncon(network::ncon(content)?),
    UpdateType::Ccem => Payload::Ccem(network::ccem(content)?),
    UpdateType::Picu => Payload::Picu(network::picu(content)?),
    UpdateType::Prfx => Payload::Prfx(network::prfx(content)?),
    UpdateType::Prof => Payload::Prof(network::prof(content, options)?),
    UpdateType::Shar => Payload::Shar(share::shar(content)?),
    UpdateType::Stat => Payload::Stat(share::stat(content)?),
    UpdateType::Virl => Payload::Virl(share::virl(content)?),
    UpdateType::Jgrp => Payload::Jgrp(activity::jgrp(content)?),
    UpdateType::Apps => Payload::Apps(activity::apps(content)?),
    UpdateType::Appm => Payload::Appm(activity::appm(content)?),
    UpdateType::Qstn => Payload::Qstn(qa::qstn(content)?),
    UpdateType::Answ => Payload::Answ(qa::answ(content)?),
    UpdateType::Prec => Payload::Prec(recommend::prec(content)?),
    UpdateType::Svpr => Payload::Svpr(recommend::svpr(content)?),
    UpdateType::Jobp => Payload::Jobp(job::jobp(content)?),
  })
}

//! Main vehicle control executable entry point.
//!
//! # Architecture
//!
//! The executable drives a single simulated Ackermann vehicle interactively:
//!
//!     - Initialise the session, logger, parameters and modules
//!     - Main loop:
//!         - Read a line of teleop keystrokes
//!         - Apply each keystroke to the front steer controller's setpoints
//!         - Run one control cycle and integrate the vehicle state
//!
//! All processing modules implement the `util::module::State` trait.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Report};
use log::{debug, info, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

// Internal
use util::{
    logger::{logger_init, LevelFilter},
    module::State,
    session::Session,
};
use veh_lib::{
    front_steer_ctrl::FrontSteerCtrl,
    veh_model::{self, VehGeom, VehState},
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Target period of one control cycle.
const CYCLE_PERIOD_S: f64 = 0.10;

/// Prompt shown for teleop input
const PROMPT: &str = "teleop > ";

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    // ---- EARLY INITIALISATION ----

    color_eyre::install()?;

    // Initialise session
    let session = Session::new("veh_exec", "sessions")
        .wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Ackermann Vehicle Control Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let veh_params: veh_model::Params = util::params::load("veh_model.toml")
        .wrap_err("Could not load vehicle model params")?;

    let geom = VehGeom::from_params(&veh_params);

    info!("Vehicle model parameters loaded");
    info!("    Wheelbase: {:.3} m", geom.wheelbase_m());
    info!(
        "    Max steering angle: {:.1} deg\n",
        geom.max_steer_ang_rad().to_degrees()
    );

    // ---- INITIALISE MODULES ----

    let mut front_steer_ctrl = FrontSteerCtrl::new(&geom)
        .wrap_err("Failed to construct the front steer controller")?;

    front_steer_ctrl
        .init("front_steer_ctrl.toml", &session)
        .wrap_err("Failed to initialise the front steer controller")?;

    let mut veh_state = VehState::default();

    // ---- MAIN LOOP ----

    let mut rl = DefaultEditor::new().wrap_err("Failed to initialise teleop input")?;

    info!("Teleop ready, one control cycle runs per input line\n");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());

                // Apply each keystroke on the line to the setpoints
                for keycode in line.chars() {
                    let report = front_steer_ctrl.teleop_step(keycode);
                    info!("{}", report);
                }

                // Run one control cycle on the updated setpoints
                let ctrl_input = veh_state.as_ctrl_input(CYCLE_PERIOD_S);
                let (ctrl_output, report) = front_steer_ctrl
                    .proc(&ctrl_input)
                    .wrap_err("Front steer controller processing failed")?;

                veh_state.integrate(&ctrl_output, &geom, &veh_params, CYCLE_PERIOD_S);

                debug!(
                    "Twist setpoints: v = {:.3} m/s, w = {:.3} rad/s",
                    report.setpoint_lin_speed_ms, report.setpoint_ang_speed_rads
                );
                debug!(
                    "Output: torques = {:?} Nm, steer = {:.3} deg",
                    ctrl_output.wheel_torque_nm,
                    ctrl_output.steer_ang_rad.to_degrees()
                );
                info!(
                    "Vehicle: pos = ({:.2}, {:.2}) m, heading = {:.1} deg, \
                     v = {:.3} m/s, w = {:.3} rad/s",
                    veh_state.pos_m_lm[0],
                    veh_state.pos_m_lm[1],
                    veh_state.heading_rad.to_degrees(),
                    veh_state.lin_speed_ms,
                    veh_state.ang_speed_rads
                );
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                warn!("Unhandled teleop input error: {:?}", e);
                break;
            }
        }
    }

    info!("Exiting");

    Ok(())
}

//! Authored courseware.
//!
//! Immutable record literals, loaded once. Each step embeds a full
//! [`SystemState`] snapshot plus the author's narrative `expected_*` values;
//! [`super::validate`] cross-checks those against the evaluator at startup.

use once_cell::sync::Lazy;

use crate::domain::{
    Difficulty, Lesson, LessonCategory, LessonStep, LoadSource, SystemState, UpsUnitState,
    ViewMode,
};

fn step(
    id: u32,
    title: &str,
    description: &str,
    warning: Option<&str>,
    system_state: SystemState,
    expected_source: LoadSource,
) -> LessonStep {
    LessonStep {
        id,
        title: title.to_string(),
        description: description.to_string(),
        warning: warning.map(str::to_string),
        system_state,
        expected_source,
        expected_powered: expected_source != LoadSource::None,
    }
}

fn on_mains(unit: UpsUnitState) -> SystemState {
    SystemState::single(unit)
}

fn off_a() -> UpsUnitState {
    UpsUnitState::all_off('A')
}

fn normal_a() -> UpsUnitState {
    UpsUnitState::normal_online('A')
}

pub static LESSONS: Lazy<Vec<Lesson>> = Lazy::new(|| {
    vec![
        principle_online(),
        principle_battery(),
        principle_bypass(),
        principle_eco(),
        theory_indicators(),
        theory_maintenance(),
        op_single_start(),
        op_single_maint(),
        op_parallel_start(),
        op_parallel_exit(),
        op_parallel_rejoin(),
    ]
});

fn principle_online() -> Lesson {
    Lesson {
        id: "principle-online".into(),
        title: "Principle: Normal Operation (Double Conversion)".into(),
        category: LessonCategory::Principle,
        difficulty: Difficulty::Basic,
        view_mode: ViewMode::Single,
        steps: vec![step(
            1,
            "Mains-to-inverter mode",
            "The standard operating state of an online double-conversion UPS. \
             Mains power is rectified to DC, then inverted back to regulated AC \
             for the load.\n\nKey points:\n1. The load is fed 100% by the \
             inverter; the waveform is clean.\n2. Spikes, surges and frequency \
             drift on the input never reach the load.\n3. The battery floats on \
             the charger.",
            None,
            on_mains(normal_a()),
            LoadSource::Inverter,
        )],
    }
}

fn principle_battery() -> Lesson {
    Lesson {
        id: "principle-battery".into(),
        title: "Principle: Battery Operation".into(),
        category: LessonCategory::Principle,
        difficulty: Difficulty::Basic,
        view_mode: ViewMode::Single,
        steps: vec![step(
            1,
            "Mains failure or out of tolerance",
            "When the input fails or drifts outside tolerance (around ±15%), \
             the rectifier shuts down and the battery string discharges through \
             Q5 to hold up the DC bus.\n\nKey points:\n1. The inverter keeps \
             running; no transfer happens, so the break is a true 0 ms.\n2. The \
             load never notices.",
            None,
            SystemState {
                mains_available: false,
                ..on_mains(UpsUnitState {
                    rectifier_on: false,
                    ..normal_a()
                })
            },
            LoadSource::Inverter,
        )],
    }
}

fn principle_bypass() -> Lesson {
    Lesson {
        id: "principle-bypass".into(),
        title: "Principle: Static Bypass".into(),
        category: LessonCategory::Principle,
        difficulty: Difficulty::Advanced,
        view_mode: ViewMode::Single,
        steps: vec![
            step(
                1,
                "Automatic transfer conditions",
                "The UPS transfers to bypass automatically when:\n1. The \
                 inverter is overloaded, e.g. an inrush above 125-150%.\n2. The \
                 inverter faults: IGBT over-temperature or gate-drive failure.\n\n\
                 The logic blocks the inverter and gates the static switch in \
                 the same instant.",
                Some(
                    "On bypass the load is connected straight to mains with no \
                     voltage or frequency conditioning.",
                ),
                on_mains(UpsUnitState {
                    inverter_on: false,
                    static_bypass_on: true,
                    ..normal_a()
                }),
                LoadSource::Bypass,
            ),
            step(
                2,
                "Automatic recovery",
                "If the transfer was caused by overload, the UPS restarts the \
                 inverter once the load falls back into range and retransfers \
                 without a break. A fault transfer needs manual intervention.",
                None,
                on_mains(normal_a()),
                LoadSource::Inverter,
            ),
        ],
    }
}

fn principle_eco() -> Lesson {
    Lesson {
        id: "principle-eco".into(),
        title: "Principle: ECO Mode".into(),
        category: LessonCategory::Principle,
        difficulty: Difficulty::Expert,
        view_mode: ViewMode::Single,
        steps: vec![
            step(
                1,
                "Efficiency first",
                "Where input quality is excellent, ECO mode feeds the load from \
                 the static bypass by default with the rectifier and inverter \
                 on standby. Whole-unit efficiency reaches 99% versus 94-96% in \
                 double conversion.",
                None,
                on_mains(UpsUnitState {
                    inverter_on: false,
                    static_bypass_on: true,
                    rectifier_on: false,
                    ..normal_a()
                }),
                LoadSource::Bypass,
            ),
            step(
                2,
                "Millisecond fallback",
                "On the first sign of input disturbance the UPS restarts the \
                 inverter and returns to double conversion in under 4 ms, \
                 typically 2 ms.",
                None,
                on_mains(normal_a()),
                LoadSource::Inverter,
            ),
        ],
    }
}

fn theory_indicators() -> Lesson {
    Lesson {
        id: "theory-indicators".into(),
        title: "Knowledge: Panel Indicators and Alarms".into(),
        category: LessonCategory::Principle,
        difficulty: Difficulty::Basic,
        view_mode: ViewMode::Single,
        steps: vec![step(
            1,
            "Reading the mimic panel",
            "A standard UPS panel mirrors the power path with LEDs:\n1. LINE: \
             steady green, input healthy.\n2. INV: steady green, inverter \
             carrying the load.\n3. BYP: steady amber, load on bypass (warning \
             state).\n4. FAULT: red, unit fault.",
            None,
            on_mains(normal_a()),
            LoadSource::Inverter,
        )],
    }
}

fn theory_maintenance() -> Lesson {
    Lesson {
        id: "theory-maintenance".into(),
        title: "Knowledge: Preventive Maintenance".into(),
        category: LessonCategory::Principle,
        difficulty: Difficulty::Basic,
        view_mode: ViewMode::Single,
        steps: vec![step(
            1,
            "Preventive maintenance items",
            "1. Capacitors: DC bus and AC filter capacitors last 5-7 years; \
             aging raises ripple and can end in rupture.\n2. Fans: replace at \
             3-5 years before poor airflow overheats the IGBTs.\n3. Deep \
             cleaning: conductive dust is the main killer of control boards.",
            None,
            on_mains(normal_a()),
            LoadSource::Inverter,
        )],
    }
}

fn op_single_start() -> Lesson {
    Lesson {
        id: "op-single-start".into(),
        title: "Single Unit: Standard Start-Up".into(),
        category: LessonCategory::Operation,
        difficulty: Difficulty::Advanced,
        view_mode: ViewMode::Single,
        steps: vec![
            step(
                1,
                "1. Close the input breakers",
                "Close bypass input Q2, then mains input Q1. The unit powers \
                 up, the rectifier starts and self-tests. The load is carried \
                 by the static bypass.",
                None,
                on_mains(UpsUnitState {
                    q1_input: true,
                    q2_bypass: true,
                    q4_output: true,
                    rectifier_on: true,
                    static_bypass_on: true,
                    ..off_a()
                }),
                LoadSource::Bypass,
            ),
            step(
                2,
                "2. Close the battery breaker",
                "Close DC breaker Q5. The rectifier begins boost/float charging \
                 the battery string.",
                None,
                on_mains(UpsUnitState {
                    q1_input: true,
                    q2_bypass: true,
                    q5_battery: true,
                    q4_output: true,
                    rectifier_on: true,
                    static_bypass_on: true,
                    ..off_a()
                }),
                LoadSource::Bypass,
            ),
            step(
                3,
                "3. Start the inverter (ON)",
                "Hold the panel ON key for two seconds. The inverter ramps up, \
                 phase-locks to the bypass source, then the static switch hands \
                 the load to the inverter without a break.",
                None,
                on_mains(normal_a()),
                LoadSource::Inverter,
            ),
        ],
    }
}

fn op_single_maint() -> Lesson {
    Lesson {
        id: "op-single-maint".into(),
        title: "Single Unit: Transfer to Maintenance Bypass".into(),
        category: LessonCategory::Operation,
        difficulty: Difficulty::Advanced,
        view_mode: ViewMode::Single,
        steps: vec![
            step(
                1,
                "1. Transfer to static bypass",
                "Execute 'Transfer to Bypass' from the panel menu (or press \
                 OFF). Confirm the bypass LED is lit and mains is feeding the \
                 load directly.",
                Some(
                    "Transfer to static bypass FIRST. Closing the maintenance \
                     switch while the inverter carries the load short-circuits \
                     the inverter output.",
                ),
                on_mains(UpsUnitState {
                    inverter_on: false,
                    static_bypass_on: true,
                    ..normal_a()
                }),
                LoadSource::Bypass,
            ),
            step(
                2,
                "2. Close maintenance breaker Q3",
                "Close Q3. The static bypass and the maintenance bypass are now \
                 paralleled; same source, same phase, no circulating current.",
                None,
                SystemState {
                    q3_maint_bypass: true,
                    ..on_mains(UpsUnitState {
                        inverter_on: false,
                        static_bypass_on: true,
                        ..normal_a()
                    })
                },
                LoadSource::Maint,
            ),
            step(
                3,
                "3. Open the internal breakers",
                "Open Q4 (output), Q5 (battery), Q1 (rectifier input) and Q2 \
                 (bypass input) in order. The chassis is now fully dead inside \
                 and the load rides on Q3.",
                None,
                SystemState {
                    q3_maint_bypass: true,
                    ..on_mains(off_a())
                },
                LoadSource::Maint,
            ),
        ],
    }
}

fn parallel(a: UpsUnitState, b: UpsUnitState) -> SystemState {
    SystemState::parallel(a, b)
}

fn op_parallel_start() -> Lesson {
    let rect_started = |id: char| UpsUnitState {
        q1_input: true,
        q2_bypass: true,
        rectifier_on: true,
        static_bypass_on: true,
        ..UpsUnitState::all_off(id)
    };
    let battery_in = |id: char| UpsUnitState {
        q5_battery: true,
        ..rect_started(id)
    };
    let on_bypass = |id: char| UpsUnitState {
        q4_output: true,
        ..battery_in(id)
    };

    Lesson {
        id: "op-parallel-start".into(),
        title: "Parallel: 1+1 Redundant Start-Up".into(),
        category: LessonCategory::Operation,
        difficulty: Difficulty::Advanced,
        view_mode: ViewMode::Parallel,
        steps: vec![
            step(
                1,
                "Pre-power checks",
                "Verify every breaker is open. Measure input voltage, confirm \
                 line/neutral orientation, and check the paralleling \
                 communication loop is complete.",
                None,
                parallel(UpsUnitState::all_off('A'), UpsUnitState::all_off('B')),
                LoadSource::None,
            ),
            step(
                2,
                "Rectifier start",
                "Close Q1 and Q2 on both units. The systems initialize and the \
                 rectifiers start. The load bus is still dead.",
                None,
                parallel(rect_started('A'), rect_started('B')),
                LoadSource::None,
            ),
            step(
                3,
                "Connect the batteries",
                "Close Q5 on both units, connecting the battery strings to the \
                 DC buses.",
                None,
                parallel(battery_in('A'), battery_in('B')),
                LoadSource::None,
            ),
            step(
                4,
                "Paralleled bypass feed",
                "Close unit A's Q4, then unit B's Q4. Both units now feed the \
                 load in parallel through their static bypasses.",
                None,
                parallel(on_bypass('A'), on_bypass('B')),
                LoadSource::Bypass,
            ),
            step(
                5,
                "Start the inverters",
                "Issue the ON command. Both inverters start, phase-lock \
                 together, transfer simultaneously to online mode and share the \
                 load.",
                None,
                parallel(UpsUnitState::normal_online('A'), UpsUnitState::normal_online('B')),
                LoadSource::Inverter,
            ),
        ],
    }
}

fn op_parallel_exit() -> Lesson {
    Lesson {
        id: "op-parallel-exit".into(),
        title: "Parallel: Taking One Unit Out for Service".into(),
        category: LessonCategory::Operation,
        difficulty: Difficulty::Expert,
        view_mode: ViewMode::Parallel,
        steps: vec![
            step(
                1,
                "Confirm the load",
                "Unit B needs service. With only two units, confirm unit A's \
                 load share is below 50% so one chassis can carry everything.",
                None,
                parallel(UpsUnitState::normal_online('A'), UpsUnitState::normal_online('B')),
                LoadSource::Inverter,
            ),
            step(
                2,
                "Soft-stop the unit",
                "Execute OFF on unit B's panel. Its inverter stops and the load \
                 migrates smoothly to unit A. Unit B is still live inside.",
                Some("Re-check the load level before pressing OFF."),
                parallel(
                    UpsUnitState::normal_online('A'),
                    UpsUnitState {
                        inverter_on: false,
                        static_bypass_on: false,
                        ..UpsUnitState::normal_online('B')
                    },
                ),
                LoadSource::Inverter,
            ),
            step(
                3,
                "Open output Q4",
                "Open unit B's Q4. The chassis is now physically isolated from \
                 the paralleling bus.",
                None,
                parallel(
                    UpsUnitState::normal_online('A'),
                    UpsUnitState {
                        inverter_on: false,
                        q4_output: false,
                        ..UpsUnitState::normal_online('B')
                    },
                ),
                LoadSource::Inverter,
            ),
            step(
                4,
                "Full isolation",
                "Open unit B's Q1, Q2 and Q5. The chassis is completely dead \
                 and safe to work on. Unit A stays online.",
                None,
                parallel(UpsUnitState::normal_online('A'), UpsUnitState::all_off('B')),
                LoadSource::Inverter,
            ),
        ],
    }
}

fn op_parallel_rejoin() -> Lesson {
    Lesson {
        id: "op-parallel-rejoin".into(),
        title: "Parallel: Returning a Unit to Service".into(),
        category: LessonCategory::Operation,
        difficulty: Difficulty::Expert,
        view_mode: ViewMode::Parallel,
        steps: vec![
            step(
                1,
                "Initial state",
                "Unit A is online and carrying the load. Unit B has been \
                 repaired and is ready to rejoin the system.",
                None,
                parallel(UpsUnitState::normal_online('A'), UpsUnitState::all_off('B')),
                LoadSource::Inverter,
            ),
            step(
                2,
                "Power up unit B",
                "Close unit B's Q1 and Q2. Wait for the display to come up and \
                 initialization to finish. Confirm there are no alarms.",
                None,
                parallel(
                    UpsUnitState::normal_online('A'),
                    UpsUnitState {
                        q1_input: true,
                        q2_bypass: true,
                        rectifier_on: true,
                        static_bypass_on: true,
                        ..UpsUnitState::all_off('B')
                    },
                ),
                LoadSource::Inverter,
            ),
            step(
                3,
                "Close battery breaker Q5",
                "Close unit B's Q5 and verify the DC bus voltage is normal.",
                None,
                parallel(
                    UpsUnitState::normal_online('A'),
                    UpsUnitState {
                        q1_input: true,
                        q2_bypass: true,
                        q5_battery: true,
                        rectifier_on: true,
                        static_bypass_on: true,
                        ..UpsUnitState::all_off('B')
                    },
                ),
                LoadSource::Inverter,
            ),
            step(
                4,
                "Start the inverter",
                "Press ON on unit B. Its inverter starts and tracks the bus \
                 frequency and phase through the paralleling card.",
                Some("Do not close Q4 yet. Let the inverter run and synchronize first."),
                parallel(
                    UpsUnitState::normal_online('A'),
                    UpsUnitState {
                        q4_output: false,
                        ..UpsUnitState::normal_online('B')
                    },
                ),
                LoadSource::Inverter,
            ),
            step(
                5,
                "Close output Q4 (rejoin)",
                "Once unit B shows 'Inverter ON' and in-sync, close Q4. The \
                 unit picks up its share immediately and 1+1 redundancy is \
                 restored.",
                None,
                parallel(UpsUnitState::normal_online('A'), UpsUnitState::normal_online('B')),
                LoadSource::Inverter,
            ),
        ],
    }
}

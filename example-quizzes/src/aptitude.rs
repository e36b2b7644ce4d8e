//! A compact ICT-aptitude question bank in the shape the scoring service
//! expects: four-option forced-choice items, five-level Likert items, and
//! two-stage situational-judgment items.

use vocatio::{BankEntry, QuestionBank};

/// Build the sample bank.
pub fn bank() -> QuestionBank {
    let mut bank = QuestionBank::new();

    bank.insert_forced_choice(
        "FC01",
        BankEntry::new(
            "A new side project lands in your lap. What do you start with?",
            [
                ("1", "Sketch a rough prototype and iterate"),
                ("2", "Set up the deployment pipeline first"),
                ("3", "Pull a dataset and explore it"),
                ("4", "Draft the interface layout"),
            ],
        ),
    );
    bank.insert_forced_choice(
        "FC02",
        BankEntry::new(
            "A teammate reports a bug you cannot reproduce. You...",
            [
                ("1", "Read the stack trace line by line"),
                ("2", "Add logging around the suspect path"),
                ("3", "Pair with the reporter on their machine"),
                ("4", "Write a regression test that should fail"),
            ],
        ),
    );
    bank.insert_forced_choice(
        "FC10",
        BankEntry::new(
            "Which part of a code review do you enjoy most?",
            [
                ("1", "Spotting edge cases"),
                ("2", "Tightening the architecture"),
                ("3", "Polishing naming and readability"),
                ("4", "Checking the security surface"),
            ],
        ),
    );

    bank.insert_likert(
        "LI01",
        BankEntry::new(
            "I enjoy being on call when production is shaky.",
            agreement_levels(),
        ),
    );
    bank.insert_likert(
        "LI02",
        BankEntry::new(
            "Presenting results to non-engineers energizes me.",
            agreement_levels(),
        ),
    );

    bank.insert_situational(
        "SJT01",
        BankEntry::new(
            "A release is due in an hour and a flaky test keeps failing.",
            [
                ("1", "Quarantine the test and file a ticket"),
                ("2", "Debug it now, the release can slip"),
                ("3", "Ship and watch the error budget"),
                ("4", "Ask the author to make the call"),
            ],
        ),
    );
    bank.insert_situational(
        "SJT02",
        BankEntry::new(
            "A customer demo crashes on stage.",
            [
                ("1", "Switch to the recorded backup demo"),
                ("2", "Hot-fix live with the audience watching"),
                ("3", "Hand over to a colleague and debug quietly"),
                ("4", "Walk the audience through the failure honestly"),
            ],
        ),
    );

    bank
}

fn agreement_levels() -> [(&'static str, &'static str); 5] {
    [
        ("1", "Strongly disagree"),
        ("2", "Disagree"),
        ("3", "Neutral"),
        ("4", "Agree"),
        ("5", "Strongly agree"),
    ]
}

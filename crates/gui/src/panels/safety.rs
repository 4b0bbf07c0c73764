//! Safety hub panel: static reference content on altitude illness,
//! acclimatization, rescue protocol, and seasonal conditions.

use egui::{Color32, RichText, ScrollArea, Ui};

struct AmsStage {
    severity: &'static str,
    color: Color32,
    symptoms: &'static [&'static str],
    action: &'static str,
}

const AMS_STAGES: &[AmsStage] = &[
    AmsStage {
        severity: "Mild AMS",
        color: Color32::from_rgb(230, 180, 50),
        symptoms: &[
            "Headache",
            "Fatigue",
            "Loss of appetite",
            "Mild nausea",
            "Difficulty sleeping",
        ],
        action: "Rest at current altitude. Do NOT ascend until symptoms resolve. \
                 Hydrate well. Ibuprofen for headache.",
    },
    AmsStage {
        severity: "Moderate AMS",
        color: Color32::from_rgb(235, 130, 50),
        symptoms: &[
            "Severe headache (not relieved by medication)",
            "Vomiting",
            "Extreme fatigue",
            "Shortness of breath at rest",
            "Unsteady gait",
        ],
        action: "DESCEND immediately, minimum 500-1000 m. Take Diamox 250 mg if \
                 available. Seek medical help.",
    },
    AmsStage {
        severity: "HACE / HAPE",
        color: Color32::from_rgb(220, 60, 60),
        symptoms: &[
            "Confusion / altered consciousness",
            "Cannot walk straight",
            "Gurgling sound when breathing",
            "Coughing blood-tinged froth",
            "Extreme breathlessness at rest",
        ],
        action: "LIFE-THREATENING. Descend NOW regardless of time or weather. Use \
                 GAMOW bag if available. Call helicopter rescue immediately.",
    },
];

const ACCLIMATIZATION_RULES: &[(&str, &str)] = &[
    (
        "The \"Golden Rule\"",
        "Never ascend with AMS symptoms. Descend if symptoms worsen overnight.",
    ),
    (
        "Ascend slowly",
        "Above 3,000 m: ascend no more than 300-500 m per day in sleeping altitude.",
    ),
    (
        "Rest days",
        "Take one acclimatization rest day for every 1,000 m gain above 3,000 m.",
    ),
    (
        "\"Climb high, sleep low\"",
        "Day hikes to higher altitudes then return to sleep at lower elevation.",
    ),
    (
        "Hydration",
        "Drink 4-6 liters of water per day at altitude. Avoid alcohol and sleeping pills.",
    ),
    (
        "Diamox",
        "Acetazolamide 125-250 mg twice daily can aid acclimatization. Consult a \
         doctor before the trek.",
    ),
];

const SOS_STEPS: &[&str] = &[
    "Stay calm. Assess the patient and situation.",
    "Move to a safe location away from hazards (rockfall, weather exposure).",
    "Call Nepal Police (100) or Mountain Rescue (+977-1-4411105).",
    "Provide GPS coordinates or nearest landmark/village name.",
    "If altitude illness, begin descent immediately, do NOT wait for rescue.",
    "Administer Diamox/Dexamethasone if available and trained.",
    "Keep patient warm, hydrated, and conscious.",
    "Mark helicopter landing zone with bright colors if possible.",
];

const EMERGENCY_CONTACTS: &[(&str, &str, &str)] = &[
    ("Nepal Police Emergency", "100", "Available 24/7"),
    (
        "Mountain Rescue Association Nepal",
        "+977-1-4411105",
        "Specialized mountain rescue",
    ),
    (
        "CIWEC Clinic Kathmandu",
        "+977-1-4435232",
        "Travel medicine specialists",
    ),
    (
        "Nepal SOS International",
        "+977-1-4434650",
        "24hr emergency coordination",
    ),
    (
        "Himalayan Rescue Association",
        "+977-1-4440292",
        "Aid posts on major routes",
    ),
];

const HELICOPTER_TIPS: &[&str] = &[
    "Ensure you have comprehensive travel insurance with helicopter evacuation cover",
    "CIWEC, Fishtail Air, and Simrik Air operate emergency services",
    "Provide accurate GPS coordinates when calling for rescue",
    "Clear helicopter landing zone: flat area 30x30 m, mark with bright cloth",
];

const SEASONS: &[(&str, &str)] = &[
    (
        "Pre-Monsoon (Mar-May)",
        "Best visibility, rhododendrons in bloom. Watch for afternoon thunderstorms \
         above 4000 m.",
    ),
    (
        "Monsoon (Jun-Sep)",
        "Heavy rain, flash flood risk, leeches below 3000 m. High passes may close. \
         Not recommended.",
    ),
    (
        "Post-Monsoon (Oct-Nov)",
        "Crystal clear skies, ideal conditions. Most popular season, expect crowds.",
    ),
    (
        "Winter (Dec-Feb)",
        "Cold but clear. High passes (>5000 m) may be snowbound. Less crowded. Good \
         for lower treks.",
    ),
];

fn section_heading(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.add_space(10.0);
    ui.label(RichText::new(title).strong().size(16.0));
    ui.label(RichText::new(subtitle).size(11.0).color(Color32::GRAY));
    ui.add_space(4.0);
}

/// Show the safety hub panel.
pub fn show_safety(ui: &mut Ui) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.heading("Himalayan Safety Hub");
            ui.label(
                "Essential safety information for trekking in Nepal. Altitude illness \
                 kills: know the signs, know when to descend.",
            );

            section_heading(
                ui,
                "Altitude Illness (AMS) Recognition",
                "Know the three stages",
            );
            for stage in AMS_STAGES {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new(stage.severity).strong().color(stage.color));
                    ui.horizontal_top(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new("Symptoms").size(10.0).color(Color32::GRAY));
                            for s in stage.symptoms {
                                ui.label(format!("• {s}"));
                            }
                        });
                        ui.separator();
                        ui.vertical(|ui| {
                            ui.label(RichText::new("Action").size(10.0).color(Color32::GRAY));
                            ui.label(stage.action);
                        });
                    });
                });
                ui.add_space(4.0);
            }

            section_heading(
                ui,
                "Acclimatization Rules",
                "Follow these to prevent altitude illness",
            );
            for (rule, detail) in ACCLIMATIZATION_RULES {
                ui.label(RichText::new(*rule).strong());
                ui.label(*detail);
                ui.add_space(3.0);
            }

            section_heading(
                ui,
                "Emergency SOS Protocol",
                "What to do when someone needs rescue",
            );
            for (i, step) in SOS_STEPS.iter().enumerate() {
                ui.label(format!("{}. {}", i + 1, step));
            }

            section_heading(ui, "Emergency Contacts", "Save these before you leave");
            for (org, number, note) in EMERGENCY_CONTACTS {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(*org).strong());
                    ui.label(RichText::new(*number).monospace());
                });
                ui.label(RichText::new(*note).size(11.0).color(Color32::GRAY));
                ui.add_space(3.0);
            }

            section_heading(ui, "Helicopter Evacuation", "Typical response 2-4 hours");
            ui.label(
                "Nepal helicopter rescue services operate in most trekking areas. \
                 Response time is typically 2-4 hours from major towns. Rescue costs \
                 NPR 300,000-600,000 (USD 2,200-4,500).",
            );
            for tip in HELICOPTER_TIPS {
                ui.label(format!("• {tip}"));
            }

            section_heading(ui, "Weather Safety", "Conditions by season");
            for (season, desc) in SEASONS {
                ui.label(RichText::new(*season).strong());
                ui.label(*desc);
                ui.add_space(3.0);
            }

            ui.add_space(10.0);
            ui.separator();
            ui.label(RichText::new("Before You Trek").strong());
            ui.label(
                "Get travel insurance, learn AMS symptoms, download offline maps, and \
                 register with your embassy. Preparation saves lives.",
            );
            ui.add_space(8.0);
        });
}

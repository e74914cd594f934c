//! Extract one record from a MARC file and print its decoded fixed
//! fields.
//!
//! Descriptor labels carry a `(NN/WW)` offset/width prefix, so sorting
//! them lexicographically recovers byte order; the prefix is stripped
//! before printing. Blanks in codes print as `#` so they stay visible.

use std::env;
use std::fs::File;
use std::process;

use anyhow::{Context, Result};
use serde::Serialize;

use mrdc::{
    describe_006, describe_007, describe_008, describe_leader, Cf006Desc, Cf007Desc, Cf008Desc,
    CodeValue, LdrDesc, MarcReader, Record,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        show_help(&args[0]);
    }
    let marcfile = &args[1];
    let cn = &args[2];
    let as_json = args.get(3).is_some_and(|a| a == "--json");

    let file = File::open(marcfile).with_context(|| format!("File open failed: {marcfile:?}"))?;
    let mut reader = MarcReader::new(file);

    while let Some(record) = reader.read_record()? {
        if record.control_field("001") == Some(cn.as_str()) {
            if as_json {
                dump_json(&record)?;
            } else {
                dump_record(&record);
            }
            break;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct RecordDetails {
    leader: LdrDesc,
    cf_006: Cf006Desc,
    cf_007: Vec<Cf007Desc>,
    cf_008: Cf008Desc,
}

fn dump_json(record: &Record) -> Result<()> {
    let details = RecordDetails {
        leader: describe_leader(record),
        cf_006: describe_006(record),
        cf_007: describe_007(record),
        cf_008: describe_008(record),
    };
    println!("{}", serde_json::to_string_pretty(&details)?);
    Ok(())
}

fn dump_record(record: &Record) {
    dump_leader(&describe_leader(record));

    for tag in ["001", "003", "004", "005"] {
        for text in record.control_fields(tag) {
            println!("{tag}:    {text}");
        }
    }

    dump_cf006(&describe_006(record));
    dump_cf007(&describe_007(record));
    dump_cf008(&describe_008(record));
}

fn dump_leader(ldr: &LdrDesc) {
    println!("LDR:");
    for key in sorted_keys(ldr.keys()) {
        dump_cv(&ldr[key], key, 0);
    }
}

fn dump_cf006(p6: &Cf006Desc) {
    if p6.is_empty() {
        return;
    }
    println!("006:");
    for key in sorted_keys(p6.keys()) {
        for (i, cv) in p6[key].iter().enumerate() {
            dump_cv(cv, key, i);
        }
    }
}

fn dump_cf007(p7: &[Cf007Desc]) {
    for cf in p7 {
        println!("007:");
        for key in sorted_keys(cf.keys()) {
            dump_cv(&cf[key], key, 0);
        }
    }
}

fn dump_cf008(p8: &Cf008Desc) {
    println!("008:");
    for key in sorted_keys(p8.keys()) {
        for (i, cv) in p8[key].iter().enumerate() {
            dump_cv(cv, key, i);
        }
    }
}

fn sorted_keys<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<&'a String> {
    let mut keys: Vec<&String> = keys.collect();
    keys.sort();
    keys
}

fn dump_cv(cv: &CodeValue, key: &str, i: usize) {
    let mut code = cv.code.replace(' ', "#");
    if code.is_empty() {
        code = " ".to_string();
    }
    // Strip the "(NN/WW)" sort prefix from the label.
    let name = key.split_once(' ').map_or(key, |(_, rest)| rest);

    if i == 0 {
        if cv.width == 1 {
            println!("  {:02} -     {}: ( {} = {:?} )", cv.offset, code, name, cv.label);
        } else {
            let end = cv.offset + cv.width - 1;
            println!(
                "  {:02}-{:02} -  {}: ( {} = {:?} )",
                cv.offset, end, code, name, cv.label
            );
        }
    } else if code != " " && !cv.label.is_empty() {
        println!("           {}: ( {} = {:?} )", code, name, cv.label);
    }
}

fn show_help(prog: &str) -> ! {
    println!("{prog}");
    println!("   Extract the specified record from a MARC file and print the detailed results.");
    println!("    Usage: {prog} <MARC file to search> <control number for the record to parse> [--json]");
    println!();
    process::exit(0);
}

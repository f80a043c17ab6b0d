use crate::cli::{build_generator, GeneratorArgs};
use crate::error::Result;
use crate::fmt::{money, timestamp};
use crate::settings::load_settings;
use crate::share::decode_expense_share_code;

pub fn run(amount: f64, description: &str, args: &GeneratorArgs) -> Result<()> {
    let mut generator = build_generator(args, &load_settings())?;
    println!("{}", generator.expense_share_code(amount, description)?);
    Ok(())
}

pub fn decode(payload: &str) -> Result<()> {
    let share = decode_expense_share_code(payload)?;
    println!("Amount:       {}", money(share.amount));
    println!("Description:  {}", share.description);
    println!("Timestamp:    {}", timestamp(share.timestamp));
    println!("Code:         {}", share.code);
    Ok(())
}

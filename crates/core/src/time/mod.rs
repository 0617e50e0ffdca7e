pub mod jalali;

mod dispatch;
mod escaping;

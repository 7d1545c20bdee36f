mod jwt;
mod otp;
